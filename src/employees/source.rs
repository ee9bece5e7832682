//! Wire types of the random-user API.
//!
//! Every field defaults when missing so a sparse record still maps to an
//! employee; a payload of the wrong shape fails to decode.

use serde::{Deserialize, Serialize};

use super::model::{Address, Employee, FetchOptions};
use crate::serde::{deserialize_null_default, Postcode};

/// The fields we ask the API for. Everything else is dropped upstream.
const INCLUDED_FIELDS: &str = "login,name,email,phone,picture,location";

/// The query string of a fetch.
#[derive(Serialize, Debug)]
pub(crate) struct Query<'a> {
    results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nat: Option<String>,
    inc: &'static str,
}

impl<'a> From<&'a FetchOptions> for Query<'a> {
    fn from(opts: &'a FetchOptions) -> Self {
        let nat = if opts.nationalities.is_empty() {
            None
        } else {
            Some(opts.nationalities.join(","))
        };
        Self {
            results: opts.results,
            seed: opts.seed.as_deref().filter(|seed| !seed.is_empty()),
            nat,
            inc: INCLUDED_FIELDS,
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct Page {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub results: Vec<Person>,
    /// Set instead of `results` when the API failed but still answered 200.
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct Person {
    login: Login,
    name: Name,
    email: String,
    phone: String,
    picture: Picture,
    location: Location,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Login {
    uuid: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Name {
    first: String,
    last: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Picture {
    large: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Location {
    street: Street,
    city: String,
    state: String,
    country: String,
    postcode: Postcode,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Street {
    number: Option<u64>,
    name: String,
}

impl Street {
    fn line(self) -> String {
        match self.number {
            Some(number) => format!("{} {}", number, self.name),
            None => self.name,
        }
    }
}

impl From<Person> for Employee {
    fn from(person: Person) -> Self {
        let Location {
            street,
            city,
            state,
            country,
            postcode,
        } = person.location;

        Employee {
            id: person.login.uuid,
            first_name: person.name.first,
            last_name: person.name.last,
            email: person.email,
            phone: person.phone,
            picture: person.picture.large,
            address: Address {
                street: street.line(),
                city,
                state,
                country,
                postal_code: postcode.into_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn person_maps_to_employee() {
        let person: Person = serde_json::from_value(json!({
            "gender": "male",
            "name": { "title": "Mr", "first": "Oliver", "last": "Smith" },
            "location": {
                "street": { "number": 221, "name": "Baker Street" },
                "city": "London",
                "state": "Greater London",
                "country": "United Kingdom",
                "postcode": "NW1 6XE",
                "timezone": { "offset": "+0:00", "description": "London" }
            },
            "email": "oliver.smith@example.com",
            "login": { "uuid": "e1b7b5c0-1111-4c7c-9c51-000000000001", "username": "bluecat" },
            "phone": "017684 88362",
            "cell": "07421 332198",
            "picture": {
                "large": "https://randomuser.me/api/portraits/men/1.jpg",
                "medium": "https://randomuser.me/api/portraits/med/men/1.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/men/1.jpg"
            },
            "nat": "GB"
        }))
        .expect("person decodes");

        let employee = Employee::from(person);
        assert_eq!(employee.id, "e1b7b5c0-1111-4c7c-9c51-000000000001");
        assert_eq!(employee.first_name, "Oliver");
        assert_eq!(employee.last_name, "Smith");
        assert_eq!(employee.email, "oliver.smith@example.com");
        assert_eq!(employee.phone, "017684 88362");
        assert_eq!(
            employee.picture,
            "https://randomuser.me/api/portraits/men/1.jpg"
        );
        assert_eq!(employee.address.street, "221 Baker Street");
        assert_eq!(employee.address.city, "London");
        assert_eq!(employee.address.state, "Greater London");
        assert_eq!(employee.address.country, "United Kingdom");
        assert_eq!(employee.address.postal_code, "NW1 6XE");
    }

    #[test]
    fn numeric_postcode_and_sparse_record() {
        let person: Person = serde_json::from_value(json!({
            "login": { "uuid": "abc" },
            "location": { "street": { "name": "Main St" }, "postcode": 90210 }
        }))
        .expect("person decodes");

        let employee = Employee::from(person);
        assert_eq!(employee.id, "abc");
        assert_eq!(employee.address.street, "Main St");
        assert_eq!(employee.address.postal_code, "90210");
        assert_eq!(employee.email, "");
    }

    #[test]
    fn missing_results_are_empty() {
        let page: Page = serde_json::from_value(json!({ "info": { "seed": "abc" } }))
            .expect("page decodes");
        assert!(page.results.is_empty());
        assert!(page.error.is_none());

        let page: Page =
            serde_json::from_value(json!({ "results": null })).expect("page decodes");
        assert!(page.results.is_empty());
    }

    #[test]
    fn malformed_results_fail() {
        assert!(serde_json::from_value::<Page>(json!({ "results": "nope" })).is_err());
    }

    fn query_pairs(opts: &FetchOptions) -> HashMap<String, String> {
        let query = serde_qs::to_string(&Query::from(opts)).expect("query serializes");
        serde_qs::from_str(&query).expect("query parses")
    }

    #[test]
    fn query_skips_unset_options() {
        let pairs = query_pairs(&FetchOptions::default());
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs["results"], "50");
        assert_eq!(pairs["inc"], "login,name,email,phone,picture,location");

        let pairs = query_pairs(&FetchOptions {
            results: 1,
            seed: Some("abc".to_string()),
            nationalities: vec!["gb".to_string(), "us".to_string()],
        });
        assert_eq!(pairs["results"], "1");
        assert_eq!(pairs["seed"], "abc");
        assert_eq!(pairs["nat"], "gb,us");
    }

    #[test]
    fn empty_seed_is_dropped() {
        let pairs = query_pairs(&FetchOptions {
            seed: Some(String::new()),
            ..FetchOptions::default()
        });
        assert!(!pairs.contains_key("seed"));
    }
}
