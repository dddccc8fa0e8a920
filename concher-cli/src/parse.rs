//! Turns one input line into a [`Command`].
//!
//! Tokens are split on whitespace; there is no quoting, so names and targets
//! can never contain spaces. Any token that is not a known verb is a bare name
//! and means `open <token>`.

use concher_core::LocationKind;

use crate::interpreter::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Open { name: String },
    List(ListTarget),
    Register(Registration),
    Remove { name: String, context: Option<String> },
    Add { location: String, context: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListTarget {
    #[default]
    Contexts,
    Locations,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Location {
        kind: LocationKind,
        name: String,
        target: String,
    },
    Context {
        name: String,
    },
}

/// `Ok(None)` for a blank line.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match verb {
        // Trailing arguments to quit/help are ignored.
        "q" | "quit" => Command::Quit,
        "help" | "?" => Command::Help,
        "o" | "open" => match args.as_slice() {
            [name] => Command::Open { name: name.to_string() },
            _ => return Err(usage("open requires exactly one name (context or location).")),
        },
        "l" | "list" => match args.as_slice() {
            [] | ["contexts"] => Command::List(ListTarget::Contexts),
            ["locations"] => Command::List(ListTarget::Locations),
            _ => return Err(usage("list accepts contexts or locations.")),
        },
        "r" | "register" => Command::Register(parse_registration(&args)?),
        "remove" => match args.as_slice() {
            [] => return Err(usage("remove requires at least a name.")),
            [name] => Command::Remove { name: name.to_string(), context: None },
            [name, context] => Command::Remove {
                name: name.to_string(),
                context: Some(context.to_string()),
            },
            _ => return Err(usage("remove takes a name and optionally a context.")),
        },
        "add" => match args.as_slice() {
            [location, context] => Command::Add {
                location: location.to_string(),
                context: context.to_string(),
            },
            _ => return Err(usage("add requires exactly two arguments: name and context.")),
        },
        bare if args.is_empty() => Command::Open { name: bare.to_string() },
        _ => return Err(usage("Unknown command with extra arguments.")),
    };
    Ok(Some(command))
}

fn parse_registration(args: &[&str]) -> Result<Registration, CommandError> {
    let [kind, name, rest @ ..] = args else {
        return Err(usage(
            "register requires at least two arguments: app|site|context and name \
             (plus location for app/site).",
        ));
    };

    match *kind {
        "app" | "site" => {
            let [target] = rest else {
                return Err(usage(format!("register {kind} requires a name and a location.")));
            };
            let kind = kind.parse::<LocationKind>().map_err(CommandError::Usage)?;
            Ok(Registration::Location {
                kind,
                name: name.to_string(),
                target: target.to_string(),
            })
        }
        "context" => {
            if !rest.is_empty() {
                return Err(usage("register context only takes name."));
            }
            Ok(Registration::Context { name: name.to_string() })
        }
        _ => Err(usage("register kind should be app, site, or context.")),
    }
}

fn usage(msg: impl Into<String>) -> CommandError {
    CommandError::Usage(msg.into())
}
