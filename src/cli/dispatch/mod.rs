use crate::cli::actions::Action;
use anyhow::Result;
use secrecy::SecretString;
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        secret: matches
            .get_one::<String>("jwt-secret")
            .map(|s| SecretString::from(s.to_string())),
        users: matches.get_one::<String>("users").map(PathBuf::from),
        frontend_url: matches
            .get_one::<String>("frontend-url")
            .map_or_else(|| "http://localhost:8081".to_string(), |s| s.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn handler_builds_server_action() -> Result<()> {
        let matches = commands::new().get_matches_from(vec![
            "gatehouse",
            "--port",
            "9000",
            "--jwt-secret",
            "a-signing-secret",
            "--users",
            "/tmp/users.json",
        ]);

        let Action::Server {
            port,
            secret,
            users,
            frontend_url,
        } = handler(&matches)?;

        assert_eq!(port, 9000);
        assert_eq!(
            secret.map(|s| s.expose_secret().to_string()),
            Some("a-signing-secret".to_string())
        );
        assert_eq!(users, Some(PathBuf::from("/tmp/users.json")));
        assert_eq!(frontend_url, "http://localhost:8081");
        Ok(())
    }

    #[test]
    fn handler_defaults_optional_args() {
        temp_env::with_vars(
            [
                ("GATEHOUSE_PORT", None::<&str>),
                ("GATEHOUSE_JWT_SECRET", None),
                ("GATEHOUSE_USERS", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec!["gatehouse"]);

                let Ok(Action::Server {
                    port,
                    secret,
                    users,
                    ..
                }) = handler(&matches)
                else {
                    panic!("expected a server action");
                };

                assert_eq!(port, 8080);
                assert!(secret.is_none());
                assert!(users.is_none());
            },
        );
    }
}
