use std::fmt;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i64,
    #[sqlx(rename = "fio")]
    pub full_name: String,
    pub login: String,
    /// YYYYMMDD, stored as given
    pub birthday: String,
    pub email: String,
}

impl Client {
    /// Build a client that has not been inserted yet (id is 0)
    pub fn new(
        full_name: impl Into<String>,
        login: impl Into<String>,
        birthday: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            full_name: full_name.into(),
            login: login.into(),
            birthday: birthday.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} FIO: {} Login: {} Birthday: {} Email: {}",
            self.id, self.full_name, self.login, self.birthday, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_has_no_id() {
        let client = Client::new("Ivanov Ivan", "ivanov", "19900101", "ivanov@example.com");
        assert_eq!(client.id, 0);
        assert_eq!(client.login, "ivanov");
    }

    #[test]
    fn display_lists_every_field() {
        let mut client = Client::new(
            "Sharikov Poligraf Poligrafovich",
            "Sharikov_PP",
            "20250811",
            "Sharikov_PP@yandex.ru",
        );
        client.id = 1;

        assert_eq!(
            client.to_string(),
            "ID: 1 FIO: Sharikov Poligraf Poligrafovich Login: Sharikov_PP \
             Birthday: 20250811 Email: Sharikov_PP@yandex.ru"
        );
    }
}
