// Table definitions for the trivia store.

diesel::table! {
    categories (id) {
        id -> Integer,
        #[sql_name = "type"]
        kind -> Text,
    }
}

diesel::table! {
    questions (id) {
        id -> Integer,
        question -> Text,
        answer -> Text,
        category -> Integer,
        difficulty -> Integer,
    }
}

diesel::joinable!(questions -> categories (category));

diesel::allow_tables_to_appear_in_same_query!(categories, questions,);
