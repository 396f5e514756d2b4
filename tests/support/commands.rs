//! Commands understood by the fake server.

/// Represents an FTP command parsed from the client input.
#[derive(Debug, PartialEq)]
pub enum Command {
    User(String),
    Pass(String),
    Pasv,
    List(Option<String>),
    Retr(String),
    Type(String),
    Pwd,
    Noop,
    Quit,
    Unknown(String),
}

/// Parses a raw command line received from a client.
///
/// `PASS` may carry an empty argument (anonymous logins send one).
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "USER" if !arg.is_empty() => Command::User(arg.to_string()),
        "PASS" => Command::Pass(arg.to_string()),
        "PASV" => Command::Pasv,
        "LIST" if arg.is_empty() => Command::List(None),
        "LIST" => Command::List(Some(arg.to_string())),
        "RETR" if !arg.is_empty() => Command::Retr(arg.to_string()),
        "TYPE" => Command::Type(arg.to_string()),
        "PWD" => Command::Pwd,
        "NOOP" => Command::Noop,
        "QUIT" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
