//! Route templates used by the host controller to match pushed routes.
//!
//! A template is a `/`-separated path whose segments are either literals or
//! `{name}` placeholders, e.g. `/show/{showUri}`.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::NavigationError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Argument(String),
}

/// A parsed route template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    template: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a template such as `/player/{episodeUri}`
    pub fn parse(template: &str) -> Result<Self, NavigationError> {
        let Some(rest) = template.strip_prefix('/') else {
            return Err(NavigationError::invalid_template(
                template,
                "must start with '/'",
            ));
        };

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for raw in rest.split('/') {
                segments.push(Self::parse_segment(template, raw, &segments)?);
            }
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    fn parse_segment(
        template: &str,
        raw: &str,
        seen: &[Segment],
    ) -> Result<Segment, NavigationError> {
        if raw.is_empty() {
            return Err(NavigationError::invalid_template(
                template,
                "empty path segment",
            ));
        }

        match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) if name.is_empty() => Err(NavigationError::invalid_template(
                template,
                "empty argument name",
            )),
            Some(name) if name.contains(['{', '}']) => Err(NavigationError::invalid_template(
                template,
                format!("unbalanced braces in segment {raw:?}"),
            )),
            Some(name) => {
                let duplicate = seen
                    .iter()
                    .any(|s| matches!(s, Segment::Argument(existing) if existing == name));
                if duplicate {
                    return Err(NavigationError::DuplicateArgument {
                        template: template.to_string(),
                        name: name.to_string(),
                    });
                }
                Ok(Segment::Argument(name.to_string()))
            }
            None if raw.contains(['{', '}']) => Err(NavigationError::invalid_template(
                template,
                format!("unbalanced braces in segment {raw:?}"),
            )),
            None => Ok(Segment::Literal(raw.to_string())),
        }
    }

    /// The template this pattern was parsed from
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether the template has any placeholder segment
    pub fn has_arguments(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Argument(_)))
    }

    /// Match a concrete path, returning the placeholder bindings on success
    ///
    /// Placeholders bind exactly one non-empty segment; an identifier that
    /// itself contains `/` therefore does not match.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let rest = path.strip_prefix('/')?;
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut arguments = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Argument(_) if part.is_empty() => return None,
                Segment::Argument(name) => {
                    arguments.insert(name.clone(), part.to_string());
                }
            }
        }

        Some(arguments)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
