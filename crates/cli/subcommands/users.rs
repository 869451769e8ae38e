use color_eyre::Result;
use directory::{Identity, UserDirectory};
use spinners::{Spinner, Spinners};

pub async fn users<D: UserDirectory>(directory: &D, json: bool) -> Result<()> {
    // keep stdout clean for `--json`
    let mut spinner = (!json).then(|| Spinner::new(Spinners::Dots, "Fetching users ...".into()));

    let users = match directory.list_users().await {
        Ok(users) => users,
        Err(error) => {
            if let Some(spinner) = spinner.as_mut() {
                spinner.stop_and_persist("FATAL", error.to_string());
            }

            return Err(error.into());
        }
    };

    if let Some(spinner) = spinner.as_mut() {
        spinner.stop_with_message(format!("{} users", users.len()));
    }

    println!("{}", render(&users, json)?);

    Ok(())
}

fn render(users: &[Identity], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(users)?);
    }

    Ok(users.join("\n"))
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use directory::{StubDirectory, UserDirectory};

    #[test]
    fn render_plain_lines() {
        let users = vec!["Packy".to_string(), "Joan".to_string()];

        assert_eq!(super::render(&users, false).unwrap(), "Packy\nJoan");
    }

    #[tokio::test]
    async fn render_json_array_from_stub() {
        let users = StubDirectory::new(Duration::ZERO).list_users().await.unwrap();

        assert_eq!(super::render(&users, true).unwrap(), r#"["Packy","Joan"]"#);
    }
}
