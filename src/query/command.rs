use crate::core::types::UserId;

/// One parsed line of the interactive command surface
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Player { prefix: String },             // player <prefix>
    User { user_id: UserId },              // user <id>
    Top { n: usize, position: String },    // top <n> <position>
    Tags { tags: Vec<String> },            // tags '<tag>' '<tag>' ...
    Stats,
    Help,
    Quit,                                  // sair | quit | exit
}

pub const HELP: &str = "\
commands:
  player <prefix>          players whose long name starts with <prefix>
  user <id>                players rated by user <id>
  top <n> <position>       best rated players for a position
  tags '<tag>' '<tag>'...  players carrying every listed tag
  stats                    index statistics
  help                     this text
  sair | quit | exit       leave";
