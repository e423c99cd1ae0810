//! Console command grammar
//!
//! One command per line, whitespace-separated. Verbs are matched
//! case-insensitively; material names use the persisted uppercase
//! spelling (`place 0 64 0 FURNACE 2`).

use anyhow::{anyhow, bail, Result};
use glam::IVec3;
use vessel::Material;

pub const HELP: &str = "\
commands:
  place <x> <y> <z> <MATERIAL> [data]   write a block into the grid
  probe <x> <y> <z>                     read a grid cell
  create <name> <x> <y> <z>             scan a vessel from a seed cell
  delete <name>                         unregister a vessel
  list                                  list vessels and their state
  start <name> | stop <name>            arm or cancel periodic movement
  left <name> | right <name>            quarter-turn the vessel
  up <name> | down <name>               switch to vertical travel and set off
  forward <name> | reverse <name>       set travel direction and set off
  step <name>                           move one cell immediately
  save | load                           write or read the vessel directory
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Place {
        pos: IVec3,
        material: Material,
        data: u8,
    },
    Probe {
        pos: IVec3,
    },
    Create {
        name: String,
        seed: IVec3,
    },
    Delete {
        name: String,
    },
    List,
    Start {
        name: String,
    },
    Stop {
        name: String,
    },
    Left {
        name: String,
    },
    Right {
        name: String,
    },
    Up {
        name: String,
    },
    Down {
        name: String,
    },
    Forward {
        name: String,
    },
    Reverse {
        name: String,
    },
    Step {
        name: String,
    },
    Save,
    Load,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = tokens.split_first() else {
        bail!("empty command");
    };

    match (verb.to_ascii_lowercase().as_str(), args) {
        ("help", []) => Ok(Command::Help),
        ("quit" | "exit", []) => Ok(Command::Quit),
        ("list", []) => Ok(Command::List),
        ("save", []) => Ok(Command::Save),
        ("load", []) => Ok(Command::Load),
        ("place", [x, y, z, material]) => Ok(Command::Place {
            pos: coord(x, y, z)?,
            material: material_arg(material)?,
            data: 0,
        }),
        ("place", [x, y, z, material, data]) => Ok(Command::Place {
            pos: coord(x, y, z)?,
            material: material_arg(material)?,
            data: data
                .parse()
                .map_err(|_| anyhow!("invalid data value {data:?}"))?,
        }),
        ("probe", [x, y, z]) => Ok(Command::Probe {
            pos: coord(x, y, z)?,
        }),
        ("create", [name, x, y, z]) => Ok(Command::Create {
            name: (*name).to_string(),
            seed: coord(x, y, z)?,
        }),
        ("delete", [name]) => Ok(Command::Delete {
            name: (*name).to_string(),
        }),
        ("start", [name]) => Ok(Command::Start {
            name: (*name).to_string(),
        }),
        ("stop", [name]) => Ok(Command::Stop {
            name: (*name).to_string(),
        }),
        ("left", [name]) => Ok(Command::Left {
            name: (*name).to_string(),
        }),
        ("right", [name]) => Ok(Command::Right {
            name: (*name).to_string(),
        }),
        ("up", [name]) => Ok(Command::Up {
            name: (*name).to_string(),
        }),
        ("down", [name]) => Ok(Command::Down {
            name: (*name).to_string(),
        }),
        ("forward", [name]) => Ok(Command::Forward {
            name: (*name).to_string(),
        }),
        ("reverse", [name]) => Ok(Command::Reverse {
            name: (*name).to_string(),
        }),
        ("step", [name]) => Ok(Command::Step {
            name: (*name).to_string(),
        }),
        (verb, _) => bail!("unrecognized command {verb:?} (try \"help\")"),
    }
}

fn coord(x: &str, y: &str, z: &str) -> Result<IVec3> {
    Ok(IVec3::new(number(x)?, number(y)?, number(z)?))
}

fn number(text: &str) -> Result<i32> {
    text.parse()
        .map_err(|_| anyhow!("invalid coordinate {text:?}"))
}

fn material_arg(text: &str) -> Result<Material> {
    Material::from_name(&text.to_ascii_uppercase())
        .ok_or_else(|| anyhow!("unknown material {text:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        let cmd = parse("place 0 64 -3 FURNACE 2").unwrap();
        assert_eq!(
            cmd,
            Command::Place {
                pos: IVec3::new(0, 64, -3),
                material: Material::Furnace,
                data: 2,
            }
        );
    }

    #[test]
    fn test_parse_place_default_data() {
        let cmd = parse("place 1 2 3 stone").unwrap();
        assert_eq!(
            cmd,
            Command::Place {
                pos: IVec3::new(1, 2, 3),
                material: Material::Stone,
                data: 0,
            }
        );
    }

    #[test]
    fn test_parse_create() {
        let cmd = parse("create tug 10 64 -20").unwrap();
        assert_eq!(
            cmd,
            Command::Create {
                name: "tug".to_string(),
                seed: IVec3::new(10, 64, -20),
            }
        );
    }

    #[test]
    fn test_verbs_are_case_insensitive() {
        assert_eq!(parse("LIST").unwrap(), Command::List);
        assert_eq!(
            parse("Right tug").unwrap(),
            Command::Right {
                name: "tug".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_unknown_verb() {
        assert!(parse("teleport tug").is_err());
    }

    #[test]
    fn test_rejects_wrong_arity() {
        assert!(parse("create tug 1 2").is_err());
        assert!(parse("list extra").is_err());
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(parse("place x 0 0 STONE").is_err());
        assert!(parse("place 0 0 0 STONE sixteen").is_err());
    }

    #[test]
    fn test_rejects_unknown_material() {
        assert!(parse("place 0 0 0 BEDROCK").is_err());
    }
}
