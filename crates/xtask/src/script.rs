//! Compact action scripts for the `play` command.
//!
//! | token          | action                         |
//! |----------------|--------------------------------|
//! | `w`            | wait                           |
//! | `m:q,r`        | move to `(q, r)`               |
//! | `j:q,r`        | jump to `(q, r)`               |
//! | `t:q,r`        | throw the spear at `(q, r)`    |
//! | `s:skill:q,r`  | use `skill` at `(q, r)`        |
//! | `s:skill`      | use `skill` without a target   |
//! | `u:upgrade`    | take a shrine upgrade          |
//! | `z`            | undo                           |
//! | `reset`        | restart from the initial seed  |

use anyhow::{Context, Result, bail};
use hexwarden_core::{Action, Position, SkillId, UpgradeId};

pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Action>> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            parse_token(token.as_ref())
                .with_context(|| format!("token {} ({:?})", index + 1, token.as_ref()))
        })
        .collect()
}

pub fn parse_token(token: &str) -> Result<Action> {
    let token = token.trim();
    let (head, rest) = token.split_once(':').unwrap_or((token, ""));

    let action = match head.to_ascii_lowercase().as_str() {
        "w" | "wait" => Action::Wait,
        "z" | "undo" => Action::Undo,
        "reset" => Action::Reset,
        "m" | "move" => Action::Move(parse_position(rest)?),
        "j" | "jump" => Action::Jump(parse_position(rest)?),
        "t" | "throw" => Action::Throw(parse_position(rest)?),
        "s" | "skill" => {
            let (name, target) = rest.split_once(':').unwrap_or((rest, ""));
            let skill: SkillId = name
                .parse()
                .ok()
                .with_context(|| format!("unknown skill {name:?}"))?;
            let target = if target.is_empty() {
                None
            } else {
                Some(parse_position(target)?)
            };
            Action::UseSkill { skill, target }
        }
        "u" | "upgrade" => {
            let upgrade: UpgradeId = rest
                .parse()
                .ok()
                .with_context(|| format!("unknown upgrade {rest:?}"))?;
            Action::SelectUpgrade(upgrade)
        }
        other => bail!("unknown action {other:?}"),
    };
    Ok(action)
}

fn parse_position(raw: &str) -> Result<Position> {
    let Some((q, r)) = raw.split_once(',') else {
        bail!("expected a position as q,r but found {raw:?}");
    };
    let q = q.trim().parse().with_context(|| format!("bad q in {raw:?}"))?;
    let r = r.trim().parse().with_context(|| format!("bad r in {raw:?}"))?;
    Ok(Position::new(q, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_token_kind() {
        let actions = parse_script(&[
            "w",
            "m:2,9",
            "j:3,7",
            "t:3,4",
            "s:shield_bash:2,8",
            "s:basic_attack",
            "u:jump_stun",
            "z",
            "reset",
        ])
        .expect("valid script");

        assert_eq!(
            actions,
            vec![
                Action::Wait,
                Action::Move(Position::new(2, 9)),
                Action::Jump(Position::new(3, 7)),
                Action::Throw(Position::new(3, 4)),
                Action::UseSkill {
                    skill: SkillId::ShieldBash,
                    target: Some(Position::new(2, 8)),
                },
                Action::UseSkill {
                    skill: SkillId::BasicAttack,
                    target: None,
                },
                Action::SelectUpgrade(UpgradeId::JumpStun),
                Action::Undo,
                Action::Reset,
            ]
        );
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(parse_token("m:2").is_err());
        assert!(parse_token("m:a,b").is_err());
        assert!(parse_token("s:fireball:1,1").is_err());
        assert!(parse_token("x").is_err());
    }

    #[test]
    fn error_names_the_offending_token() {
        let error = parse_script(&["w", "q"]).expect_err("bad token");
        assert!(format!("{error:#}").contains("token 2"));
    }
}
