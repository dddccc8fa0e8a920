//! `add <name> <context>`: append a registered location to a context.

use std::io::Write;

use crate::interpreter::{CommandError, Interpreter, Outcome};
use crate::style;

pub fn run(it: &mut Interpreter<'_>, location: &str, context: &str) -> Result<Outcome, CommandError> {
    let ctx = it.registry.add_member(context, location)?;
    let members: Vec<&str> = ctx.members.iter().map(|m| m.0.as_str()).collect();

    writeln!(
        it.out,
        "Added {} to context {}.",
        style::name(location),
        style::name(context)
    )?;
    writeln!(it.out, "{} now contains: {}", style::name(context), members.join(", "))?;
    Ok(Outcome::MUTATED)
}

#[cfg(test)]
mod tests {
    use crate::interpreter::Outcome;
    use crate::testing::Harness;

    fn workspace() -> Harness {
        let mut h = Harness::new();
        h.script(&[
            "register site docs https://example.com",
            "register site mail https://mail.example.com",
            "register context work",
        ]);
        h
    }

    #[test]
    fn add_prints_updated_membership() {
        let mut h = workspace();
        assert_eq!(h.run("add docs work"), Outcome::MUTATED);
        assert_eq!(h.run("add mail work"), Outcome::MUTATED);
        assert_eq!(
            h.take_output(),
            "Added docs to context work.\nwork now contains: docs\n\
             Added mail to context work.\nwork now contains: docs, mail\n"
        );
        assert_eq!(h.script(&["list contexts"]), "work: docs, mail\n");
    }

    #[test]
    fn second_add_is_already_member() {
        let mut h = workspace();
        h.run("add docs work");
        h.take_output();
        assert_eq!(h.run("add docs work"), Outcome::IDLE);
        assert_eq!(h.take_output(), "Error: docs is already in context work\n");
        assert_eq!(h.members("work"), ["docs"]);
    }

    #[test]
    fn unknown_location_and_context_are_distinct_errors() {
        let mut h = workspace();
        assert_eq!(h.run("add ghost work"), Outcome::IDLE);
        assert_eq!(h.run("add docs nowhere"), Outcome::IDLE);
        assert_eq!(
            h.take_output(),
            "Error: ghost not found in locations\nError: context nowhere not found\n"
        );
    }

    #[test]
    fn contexts_cannot_be_nested() {
        let mut h = workspace();
        h.run("register context home");
        h.take_output();
        h.run("add home work");
        assert_eq!(h.take_output(), "Error: home not found in locations\n");
    }
}
