// Database schema for the person/client directory
diesel::table! {
    person (person_id) {
        person_id -> Integer,
        first_name -> Text,
        last_name -> Text,
        email_address -> Text,
        street_address -> Text,
        city -> Text,
        state -> Text,
        zip_code -> Text,
    }
}

diesel::table! {
    client (client_id) {
        client_id -> Integer,
        company_name -> Text,
        website -> Text,
        phone -> Text,
        street_address -> Text,
        city -> Text,
        state -> Text,
        zip_code -> Text,
    }
}

diesel::table! {
    client_person_associations (client_id, person_id) {
        client_id -> Integer,
        person_id -> Integer,
    }
}

diesel::allow_tables_to_appear_in_same_query!(person, client, client_person_associations);
