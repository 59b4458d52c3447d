use nom::{IResult, Parser};
use nom::bytes::complete::{take_till, take_till1};
use nom::character::complete::{char, i64 as parse_i64, multispace0, multispace1, u32 as parse_u32};
use nom::combinator::all_consuming;
use nom::multi::many0;
use nom::sequence::{delimited, preceded, terminated};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::UserId;
use crate::query::command::Command;

fn is_space(c: char) -> bool {
    c.is_whitespace()
}

fn word(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_till1(is_space)).parse(input)
}

/// Next `'...'` group; anything before the opening quote is skipped
fn quoted(input: &str) -> IResult<&str, &str> {
    preceded(
        take_till(|c: char| c == '\''),
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
    )
    .parse(input)
}

fn user_args(input: &str) -> IResult<&str, u32> {
    all_consuming(delimited(multispace1, parse_u32, multispace0)).parse(input)
}

fn top_args(input: &str) -> IResult<&str, (i64, &str)> {
    all_consuming(terminated(
        (preceded(multispace1, parse_i64), preceded(multispace1, take_till1(is_space))),
        multispace0,
    ))
    .parse(input)
}

fn tag_list(input: &str) -> IResult<&str, Vec<&str>> {
    many0(quoted).parse(input)
}

fn usage(text: &str) -> Error {
    Error::invalid_input(format!("usage: {}", text))
}

/// Parses interactive command lines. Keywords are case-insensitive.
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        CommandParser
    }

    pub fn parse(&self, line: &str) -> Result<Command> {
        let (rest, keyword) = word(line)
            .map_err(|_| Error::new(ErrorKind::UnknownCommand, "empty command".to_string()))?;

        match keyword.to_lowercase().as_str() {
            "player" => {
                let prefix = rest.trim();
                if prefix.is_empty() {
                    return Err(usage("player <prefix>"));
                }
                Ok(Command::Player { prefix: prefix.to_string() })
            }
            "user" => {
                let (_, id) = user_args(rest).map_err(|_| usage("user <id>"))?;
                Ok(Command::User { user_id: UserId(id) })
            }
            "top" => {
                let (_, (n, position)) = top_args(rest).map_err(|_| usage("top <n> <position>"))?;
                Ok(Command::Top {
                    n: n.max(0) as usize,
                    position: position.to_string(),
                })
            }
            "tags" => {
                let (_, tags) = tag_list(rest).map_err(|_| usage("tags '<tag>' '<tag>' ..."))?;
                if tags.is_empty() {
                    return Err(usage("tags '<tag>' '<tag>' ..."));
                }
                Ok(Command::Tags {
                    tags: tags.into_iter().map(str::to_string).collect(),
                })
            }
            "stats" => Ok(Command::Stats),
            "help" => Ok(Command::Help),
            "sair" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(Error::new(ErrorKind::UnknownCommand, format!("unknown command '{}'", other))),
        }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        CommandParser::new()
    }
}
