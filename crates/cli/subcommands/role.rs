use color_eyre::Result;
use colored::*;
use directory::Role;
use serde_json::json;

pub fn role(identity: String, json: bool) -> Result<()> {
    let role = directory::get_role(&identity);

    println!("{}", render(&identity, role, json)?);

    Ok(())
}

fn render(identity: &str, role: Option<Role>, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&json!({
            "identity": identity,
            "role": role,
        }))?);
    }

    Ok(match role {
        Some(role) => format!("{identity}: {}", role.to_string().green()),
        None => format!("{identity}: {}", "no role".yellow()),
    })
}

#[cfg(test)]
mod test {
    use directory::Role;
    use serde_json::Value;

    #[test]
    fn json_for_known_identity() {
        let output = super::render("Packy", Some(Role::Admin), true).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["identity"], "Packy");
        assert_eq!(value["role"], "admin");
    }

    #[test]
    fn json_for_unknown_identity_has_null_role() {
        let output = super::render("Alice", None, true).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert!(value["role"].is_null());
    }

    #[test]
    fn plain_output_mentions_role() {
        colored::control::set_override(false);

        assert_eq!(
            super::render("Joan", Some(Role::Reader), false).unwrap(),
            "Joan: reader"
        );
        assert_eq!(super::render("Alice", None, false).unwrap(), "Alice: no role");
    }
}
