use types::{Book, User};

use crate::listing::Searchable;

impl Searchable for User {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.firstname.as_str(),
            self.lastname.as_str(),
            self.email.as_str(),
            self.username.as_str(),
        ]
        .into_iter()
    }
}

impl Searchable for Book {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.author.as_str(),
            self.genre.as_str(),
            self.publisher.as_str(),
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListView;

    fn user(id: u64, first: &str, last: &str, username: &str) -> User {
        User {
            id,
            uuid: Default::default(),
            firstname: first.into(),
            lastname: last.into(),
            username: username.into(),
            password: String::new(),
            email: format!("{}.{}@example.com", first, last).to_lowercase(),
            ip: "127.0.0.1".into(),
            mac_address: "00:00:00:00:00:00".into(),
            website: "http://example.com".into(),
            image: String::new(),
        }
    }

    #[test]
    fn users_match_on_names_email_and_username() {
        let users = vec![
            user(1, "Ada", "Lovelace", "countess"),
            user(2, "Grace", "Hopper", "amazing_grace"),
            user(3, "Edsger", "Dijkstra", ""),
        ];
        let mut view = ListView::default();

        let ids = |view: &ListView| view.filter(&users).iter().map(|u| u.id).collect::<Vec<_>>();

        view.set_search_query("LOVE");
        assert_eq!(ids(&view), [1]);

        view.set_search_query("amazing");
        assert_eq!(ids(&view), [2]);

        view.set_search_query("dijkstra@");
        assert_eq!(ids(&view), [3]);

        view.set_search_query("127.0.0.1");
        assert!(ids(&view).is_empty(), "ip is not a searchable field");
    }

    #[test]
    fn books_match_on_genre_and_publisher() {
        let book = |id: u64, genre: &str, publisher: &str| Book {
            id,
            title: format!("Title {id}"),
            author: "Anonymous".into(),
            genre: genre.into(),
            description: "Mentions Mystery in passing".into(),
            isbn: "9780000000000".into(),
            image: String::new(),
            published: jiff::civil::date(2001, 1, 1),
            publisher: publisher.into(),
        };
        let books = vec![book(1, "Mystery", "Penguin"), book(2, "Poetry", "Faber")];
        let mut view = ListView::default();

        view.set_search_query("mystery");
        assert_eq!(view.filter(&books), [&books[0]]);

        view.set_search_query("faber");
        assert_eq!(view.filter(&books), [&books[1]]);
    }
}
