//! Turns a raw request line into a [`Command`].
//!
//! Tokens are separated by whitespace. The first is the start number, the
//! second the count, and the rest are property filters (`even`, `-duck`).

use amazing_numbers_core::utils::{DesiredType, FilterError, Sanitize};
use amazing_numbers_core::{Property, QueryError, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line: show the menu again.
    Help,
    /// `0` on its own.
    Exit,
    Run(Request),
}

pub fn parse_command(line: &str) -> Result<Command, QueryError> {
    let mut tokens = line.split_whitespace();

    let Some(first) = tokens.next() else {
        return Ok(Command::Help);
    };

    let start = natural(first, &[Sanitize::IsType(DesiredType::U64)]).map_err(|reason| {
        QueryError::InvalidNumber {
            input: first.to_string(),
            reason,
        }
    })?;

    let Some(second) = tokens.next() else {
        return Ok(match start {
            0 => Command::Exit,
            _ => Command::Run(Request::single(start)),
        });
    };

    let count = natural(
        second,
        &[Sanitize::IsType(DesiredType::U64), Sanitize::IsAtLeast(1)],
    )
    .map_err(|reason| QueryError::InvalidCount {
        input: second.to_string(),
        reason,
    })?;

    let mut request = Request::range(start, count);
    let mut unknown = Vec::new();

    for token in tokens {
        if Sanitize::execute(token, &[Sanitize::IsType(DesiredType::Property)]).is_err() {
            unknown.push(token.to_string());
            continue;
        }

        request = match token.strip_prefix('-') {
            Some(name) => request.exclude(name.parse::<Property>()?),
            None => request.include(token.parse::<Property>()?),
        };
    }

    if unknown.is_empty() {
        Ok(Command::Run(request))
    } else {
        Err(QueryError::UnknownProperty { tokens: unknown })
    }
}

/// Runs `filters` over `token` and reads the cleaned token as a `u64`.
fn natural(token: &str, filters: &[Sanitize]) -> Result<u64, FilterError> {
    Sanitize::execute(token, filters)?
        .parse()
        .map_err(|_| FilterError::Number(DesiredType::U64))
}
