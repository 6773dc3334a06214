// ============================================================================
// filter_parser.rs — the modifier-keyword filter token grammar
// ============================================================================
//
// args     := project (modifier | project)*
// project  := <non-modifier token>          -- emits Exactly(tok) ("Include")
// modifier := "+deps" | "+dependent" | "+exclude"
//
// A direct port of filterparser/parser.go's state machine. Go expresses the
// two states (`start`, `afterProject`) as closures returned from closures;
// this crate's idiom (see options.rs/main.rs) favors an explicit state enum
// over that pattern.
// ============================================================================

use crate::error::Error;
use crate::filter::Filter;

const DEPS_TOKEN: &str = "+deps";
const DEPENDENT_TOKEN: &str = "+dependent";
const EXCLUDE_TOKEN: &str = "+exclude";

fn is_modifier_token(tok: &str) -> bool {
    matches!(tok, DEPS_TOKEN | DEPENDENT_TOKEN | EXCLUDE_TOKEN)
}

enum State {
    Start,
    AfterProject(String),
}

/// Parses a flat token sequence into an ordered filter list, ready to pass
/// to OrderedProjectSuite::filter.
pub fn parse(tokens: &[String]) -> Result<Vec<Filter>, Error> {
    let mut filters = Vec::with_capacity(tokens.len());
    let mut state = State::Start;

    for (position, tok) in tokens.iter().enumerate() {
        state = match state {
            State::Start => {
                if is_modifier_token(tok) {
                    return Err(Error::invalid_filter_modifier_before_project(position, tok));
                }
                filters.push(Filter::Exactly(tok.clone()));
                State::AfterProject(tok.clone())
            }
            State::AfterProject(current) => match tok.as_str() {
                DEPS_TOKEN => {
                    filters.push(Filter::WithDeps(current.clone()));
                    State::AfterProject(current)
                }
                DEPENDENT_TOKEN => {
                    filters.push(Filter::WithDependents(current.clone()));
                    State::AfterProject(current)
                }
                EXCLUDE_TOKEN => {
                    filters.push(Filter::Exclude(current.clone()));
                    State::AfterProject(current)
                }
                _ => {
                    filters.push(Filter::Exactly(tok.clone()));
                    State::AfterProject(tok.clone())
                }
            },
        };
    }

    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(ss: &[&str]) -> Vec<String> {
        ss.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn project_then_deps_then_project_then_exclude() {
        let filters = parse(&toks(&["a", "+deps", "b", "+exclude"])).unwrap();
        assert_eq!(
            filters,
            vec![
                Filter::Exactly("a".into()),
                Filter::WithDeps("a".into()),
                Filter::Exactly("b".into()),
                Filter::Exclude("b".into()),
            ]
        );
    }

    #[test]
    fn leading_modifier_is_an_error() {
        let err = parse(&toks(&["+deps"])).unwrap_err();
        match err {
            Error::InvalidFilter { position, token, .. } => {
                assert_eq!(position, 0);
                assert_eq!(token, "+deps");
            }
            _ => panic!("expected InvalidFilter"),
        }
    }

    #[test]
    fn multiple_modifiers_may_follow_one_project() {
        let filters = parse(&toks(&["a", "+deps", "+dependent"])).unwrap();
        assert_eq!(
            filters,
            vec![
                Filter::Exactly("a".into()),
                Filter::WithDeps("a".into()),
                Filter::WithDependents("a".into()),
            ]
        );
    }

    #[test]
    fn empty_token_list_is_empty_filter_list() {
        assert!(parse(&[]).unwrap().is_empty());
    }
}
