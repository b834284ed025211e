//! Server-rendered HTML views. Each function takes the data bag a
//! controller assembled and returns a complete page; no template engine,
//! just escaped string assembly.

use axum::response::Html;

use crate::actions;

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
        body = body,
    ))
}

fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|message| format!("<li>{}</li>\n", escape(message)))
        .collect();
    format!("<ul class=\"errors\">\n{items}</ul>\n")
}

fn text_field(label: &str, name: &str, value: &str) -> String {
    format!(
        "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{value}\"></label><br>\n",
        value = escape(value),
    )
}

fn command_button(command: &str) -> String {
    format!("<button type=\"submit\" name=\"command\" value=\"{command}\">{command}</button>\n")
}

pub fn home() -> Html<String> {
    page(
        "Directory",
        "<ul>\n<li><a href=\"/person/list\">People</a></li>\n<li><a href=\"/client/list\">Clients</a></li>\n</ul>",
    )
}

pub mod person {
    use domain::{Client, Person};

    use super::*;
    use crate::actions::Referrer;

    fn full_name(person: &Person) -> String {
        escape(&format!("{} {}", person.first_name, person.last_name))
    }

    pub fn list(persons: &[Person]) -> Html<String> {
        let rows: String = persons
            .iter()
            .map(|p| {
                let id = p.id.unwrap_or_default();
                format!(
                    "<tr><td><a href=\"/person/person-view/{id}\">{name}</a></td>\
                     <td>{email}</td>\
                     <td><a href=\"/person/edit/{id}\">Edit</a> \
                     <a href=\"/person/delete/{id}\">Delete</a></td></tr>\n",
                    name = full_name(p),
                    email = escape(&p.email_address),
                )
            })
            .collect();
        page(
            "People",
            &format!(
                "<p><a href=\"/person/create\">Add Person</a> | <a href=\"/client/list\">Clients</a></p>\n\
                 <table>\n<tr><th>Name</th><th>Email</th><th></th></tr>\n{rows}</table>"
            ),
        )
    }

    pub fn form(person: &Person, errors: &[String], editing: bool) -> Html<String> {
        let (title, action) = if editing {
            ("Edit Person", "/person/edit")
        } else {
            ("Create Person", "/person/create")
        };
        let hidden = match person.id {
            Some(id) if editing => {
                format!("<input type=\"hidden\" name=\"entity_id\" value=\"{id}\">\n")
            }
            _ => String::new(),
        };
        let buttons = if editing {
            format!(
                "{}{}{}",
                command_button("Save"),
                command_button(actions::ADD_CLIENT),
                command_button(actions::SEE_REMOVE_CLIENTS),
            )
        } else {
            "<button type=\"submit\">Save</button>\n".to_string()
        };
        page(
            title,
            &format!(
                "{errors}<form method=\"post\" action=\"{action}\">\n{hidden}{fields}{buttons}</form>\n\
                 <p><a href=\"/person/list\">Back to list</a></p>",
                errors = error_list(errors),
                fields = format!(
                    "{}{}{}{}{}{}{}",
                    text_field("First name", "first_name", &person.first_name),
                    text_field("Last name", "last_name", &person.last_name),
                    text_field("Email address", "email_address", &person.email_address),
                    text_field("Street address", "street_address", &person.street_address),
                    text_field("City", "city", &person.city),
                    text_field("State", "state", &person.state),
                    text_field("Zip code", "zip_code", &person.zip_code),
                ),
            ),
        )
    }

    pub fn detail(person: &Person, clients: &[Client]) -> Html<String> {
        let id = person.id.unwrap_or_default();
        let rows: String = clients
            .iter()
            .map(|c| {
                format!(
                    "<tr><td>{company}</td><td>{website}</td>\
                     <td><a href=\"/person/remove/{id}-{client_id}\">Remove</a></td></tr>\n",
                    company = escape(&c.company_name),
                    website = escape(&c.website),
                    client_id = c.id.unwrap_or_default(),
                )
            })
            .collect();
        page(
            "Person",
            &format!(
                "<p>{name} &lt;{email}&gt;</p>\n\
                 <p>{street}, {city}, {state} {zip}</p>\n\
                 <h2>Clients</h2>\n<table>\n{rows}</table>\n\
                 <p><a href=\"/person/available-clients/{id}\">Add Client</a> | \
                 <a href=\"/person/edit/{id}\">Edit</a> | \
                 <a href=\"/person/list\">Back to list</a></p>",
                name = full_name(person),
                email = escape(&person.email_address),
                street = escape(&person.street_address),
                city = escape(&person.city),
                state = escape(&person.state),
                zip = escape(&person.zip_code),
            ),
        )
    }

    pub fn delete_confirm(person: &Person) -> Html<String> {
        page(
            "Delete Person",
            &format!(
                "<p>Delete {name}?</p>\n\
                 <form method=\"post\" action=\"/person/delete\">\n\
                 <input type=\"hidden\" name=\"entity_id\" value=\"{id}\">\n{delete}{cancel}</form>",
                name = full_name(person),
                id = person.id.unwrap_or_default(),
                delete = command_button(actions::COMMAND_DELETE),
                cancel = command_button(actions::COMMAND_CANCEL),
            ),
        )
    }

    pub fn remove_confirm(person: &Person, client: &Client) -> Html<String> {
        page(
            "Remove Client",
            &format!(
                "<p>Remove {company} from {name}?</p>\n\
                 <form method=\"post\" action=\"/person/remove/{client_id}\">\n\
                 <input type=\"hidden\" name=\"entity_id\" value=\"{id}\">\n{remove}{cancel}</form>",
                company = escape(&client.company_name),
                name = full_name(person),
                client_id = client.id.unwrap_or_default(),
                id = person.id.unwrap_or_default(),
                remove = command_button(actions::COMMAND_REMOVE),
                cancel = command_button(actions::COMMAND_CANCEL),
            ),
        )
    }

    /// Available or current clients for one person. Available rows post an
    /// add through the available-clients route; current rows post a remove
    /// through the edit route.
    pub fn associations(
        person: &Person,
        clients: &[Client],
        referrer: Referrer,
        available: bool,
    ) -> Html<String> {
        let id = person.id.unwrap_or_default();
        let rows: String = clients
            .iter()
            .map(|c| {
                let client_id = c.id.unwrap_or_default();
                let form = if available {
                    format!(
                        "<form method=\"post\" action=\"/person/available-clients/{client_id}\">\n\
                         <input type=\"hidden\" name=\"entity_id\" value=\"{id}\">\n\
                         <input type=\"hidden\" name=\"referrer\" value=\"{referrer}\">\n{button}</form>",
                        referrer = referrer.as_str(),
                        button = command_button(actions::ADD_CLIENT),
                    )
                } else {
                    format!(
                        "<form method=\"post\" action=\"/person/edit/{id}-{client_id}\">\n{button}</form>",
                        button = command_button(actions::REMOVE_CLIENT),
                    )
                };
                format!(
                    "<tr><td>{company}</td><td>{website}</td><td>{form}</td></tr>\n",
                    company = escape(&c.company_name),
                    website = escape(&c.website),
                )
            })
            .collect();
        let title = if available {
            "Available Clients"
        } else {
            "Current Clients"
        };
        page(
            title,
            &format!(
                "<p>{name}</p>\n<table>\n{rows}</table>\n\
                 <p><a href=\"/person/person-view/{id}\">Back to person</a></p>",
                name = full_name(person),
            ),
        )
    }
}

pub mod client {
    use domain::{Client, Person};

    use super::*;
    use crate::actions::Referrer;

    fn contact_name(person: &Person) -> String {
        escape(&format!("{} {}", person.first_name, person.last_name))
    }

    pub fn list(clients: &[Client]) -> Html<String> {
        let rows: String = clients
            .iter()
            .map(|c| {
                let id = c.id.unwrap_or_default();
                format!(
                    "<tr><td><a href=\"/client/client-view/{id}\">{company}</a></td>\
                     <td>{website}</td>\
                     <td><a href=\"/client/edit/{id}\">Edit</a> \
                     <a href=\"/client/delete/{id}\">Delete</a></td></tr>\n",
                    company = escape(&c.company_name),
                    website = escape(&c.website),
                )
            })
            .collect();
        page(
            "Clients",
            &format!(
                "<p><a href=\"/client/create\">Add Client</a> | <a href=\"/person/list\">People</a></p>\n\
                 <table>\n<tr><th>Company</th><th>Website</th><th></th></tr>\n{rows}</table>"
            ),
        )
    }

    pub fn form(client: &Client, errors: &[String], editing: bool) -> Html<String> {
        let (title, action) = if editing {
            ("Edit Client", "/client/edit")
        } else {
            ("Create Client", "/client/create")
        };
        let hidden = match client.id {
            Some(id) if editing => {
                format!("<input type=\"hidden\" name=\"entity_id\" value=\"{id}\">\n")
            }
            _ => String::new(),
        };
        let buttons = if editing {
            format!(
                "{}{}{}",
                command_button("Save"),
                command_button(actions::ADD_CONTACT),
                command_button(actions::SEE_REMOVE_CONTACTS),
            )
        } else {
            "<button type=\"submit\">Save</button>\n".to_string()
        };
        page(
            title,
            &format!(
                "{errors}<form method=\"post\" action=\"{action}\">\n{hidden}{fields}{buttons}</form>\n\
                 <p><a href=\"/client/list\">Back to list</a></p>",
                errors = error_list(errors),
                fields = format!(
                    "{}{}{}{}{}{}{}",
                    text_field("Company name", "company_name", &client.company_name),
                    text_field("Website", "website", &client.website),
                    text_field("Phone", "phone", &client.phone),
                    text_field("Street address", "street_address", &client.street_address),
                    text_field("City", "city", &client.city),
                    text_field("State", "state", &client.state),
                    text_field("Zip code", "zip_code", &client.zip_code),
                ),
            ),
        )
    }

    pub fn detail(client: &Client, contacts: &[Person]) -> Html<String> {
        let id = client.id.unwrap_or_default();
        let rows: String = contacts
            .iter()
            .map(|p| {
                format!(
                    "<tr><td>{name}</td><td>{email}</td>\
                     <td><a href=\"/client/remove/{id}-{person_id}\">Remove</a></td></tr>\n",
                    name = contact_name(p),
                    email = escape(&p.email_address),
                    person_id = p.id.unwrap_or_default(),
                )
            })
            .collect();
        page(
            "Client",
            &format!(
                "<p>{company} ({website}) {phone}</p>\n\
                 <p>{street}, {city}, {state} {zip}</p>\n\
                 <h2>Contacts</h2>\n<table>\n{rows}</table>\n\
                 <p><a href=\"/client/available-contacts/{id}\">Add Contact</a> | \
                 <a href=\"/client/edit/{id}\">Edit</a> | \
                 <a href=\"/client/list\">Back to list</a></p>",
                company = escape(&client.company_name),
                website = escape(&client.website),
                phone = escape(&client.phone),
                street = escape(&client.street_address),
                city = escape(&client.city),
                state = escape(&client.state),
                zip = escape(&client.zip_code),
            ),
        )
    }

    pub fn delete_confirm(client: &Client) -> Html<String> {
        page(
            "Delete Client",
            &format!(
                "<p>Delete {company}?</p>\n\
                 <form method=\"post\" action=\"/client/delete\">\n\
                 <input type=\"hidden\" name=\"entity_id\" value=\"{id}\">\n{delete}{cancel}</form>",
                company = escape(&client.company_name),
                id = client.id.unwrap_or_default(),
                delete = command_button(actions::COMMAND_DELETE),
                cancel = command_button(actions::COMMAND_CANCEL),
            ),
        )
    }

    pub fn remove_confirm(client: &Client, person: &Person) -> Html<String> {
        page(
            "Remove Contact",
            &format!(
                "<p>Remove {name} from {company}?</p>\n\
                 <form method=\"post\" action=\"/client/remove/{person_id}\">\n\
                 <input type=\"hidden\" name=\"entity_id\" value=\"{id}\">\n{remove}{cancel}</form>",
                name = contact_name(person),
                company = escape(&client.company_name),
                person_id = person.id.unwrap_or_default(),
                id = client.id.unwrap_or_default(),
                remove = command_button(actions::COMMAND_REMOVE),
                cancel = command_button(actions::COMMAND_CANCEL),
            ),
        )
    }

    /// Available or current contacts for one client.
    pub fn associations(
        client: &Client,
        contacts: &[Person],
        referrer: Referrer,
        available: bool,
    ) -> Html<String> {
        let id = client.id.unwrap_or_default();
        let rows: String = contacts
            .iter()
            .map(|p| {
                let person_id = p.id.unwrap_or_default();
                let form = if available {
                    format!(
                        "<form method=\"post\" action=\"/client/available-contacts/{person_id}\">\n\
                         <input type=\"hidden\" name=\"entity_id\" value=\"{id}\">\n\
                         <input type=\"hidden\" name=\"referrer\" value=\"{referrer}\">\n{button}</form>",
                        referrer = referrer.as_str(),
                        button = command_button(actions::ADD_CONTACT),
                    )
                } else {
                    format!(
                        "<form method=\"post\" action=\"/client/edit/{id}-{person_id}\">\n{button}</form>",
                        button = command_button(actions::REMOVE_CONTACT),
                    )
                };
                format!(
                    "<tr><td>{name}</td><td>{email}</td><td>{form}</td></tr>\n",
                    name = contact_name(p),
                    email = escape(&p.email_address),
                )
            })
            .collect();
        let title = if available {
            "Available Contacts"
        } else {
            "Current Contacts"
        };
        page(
            title,
            &format!(
                "<p>{company}</p>\n<table>\n{rows}</table>\n\
                 <p><a href=\"/client/client-view/{id}\">Back to client</a></p>",
                company = escape(&client.company_name),
            ),
        )
    }
}
