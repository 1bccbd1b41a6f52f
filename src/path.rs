//! Structural paths locating a value inside a snapshot tree, plus the
//! wildcard patterns used to exclude whole subtrees from comparison.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Key(String),
    Index(usize),
}

/// An ordered list of key/index steps from the document root. Never mutated
/// in place; each extension produces a new path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(Vec<Step>);

impl Path {
    pub fn root() -> Self {
        Path(Vec::new())
    }

    pub fn push_key(&self, key: &str) -> Self {
        let mut steps = self.0.clone();
        steps.push(Step::Key(key.to_string()));
        Path(steps)
    }

    pub fn push_index(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(Step::Index(index));
        Path(steps)
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for step in &self.0 {
            match step {
                Step::Key(k) => write!(f, "['{}']", k)?,
                Step::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternStep {
    Key(String),
    Index(usize),
    AnyIndex,
}

/// Exclusion pattern over structural paths, written in the same bracket
/// notation paths display as, with `[*]` matching any sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern(Vec<PatternStep>);

impl Pattern {
    /// Parse a pattern such as `root['Items'][*]['modified']`.
    pub fn parse(text: &str) -> Result<Pattern, String> {
        let rest = text
            .strip_prefix("root")
            .ok_or_else(|| format!("Pattern must start with 'root': {}", text))?;

        let mut steps = Vec::new();
        let mut chars = rest.char_indices();
        while let Some((start, c)) = chars.next() {
            if c != '[' {
                return Err(format!("Expected '[' at offset {} in pattern: {}", start, text));
            }
            let body_start = start + 1;
            let mut end = None;
            for (i, c) in chars.by_ref() {
                if c == ']' {
                    end = Some(i);
                    break;
                }
            }
            let end = end.ok_or_else(|| format!("Unclosed '[' in pattern: {}", text))?;
            let body = &rest[body_start..end];
            let step = if body == "*" {
                PatternStep::AnyIndex
            } else if let Some(key) = body.strip_prefix('\'').and_then(|b| b.strip_suffix('\'')) {
                PatternStep::Key(key.to_string())
            } else {
                let index = body
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid step '{}' in pattern: {}", body, text))?;
                PatternStep::Index(index)
            };
            steps.push(step);
        }

        if steps.is_empty() {
            return Err(format!("Pattern has no steps: {}", text));
        }
        Ok(Pattern(steps))
    }

    /// A pattern excludes a path when it matches a prefix of it, so the
    /// whole subtree under the matched location is suppressed.
    pub fn matches(&self, path: &Path) -> bool {
        if self.0.len() > path.steps().len() {
            return false;
        }
        self.0.iter().zip(path.steps()).all(|(p, s)| match (p, s) {
            (PatternStep::Key(a), Step::Key(b)) => a == b,
            (PatternStep::Index(a), Step::Index(b)) => a == b,
            (PatternStep::AnyIndex, Step::Index(_)) => true,
            _ => false,
        })
    }
}

pub fn excluded(path: &Path, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|p| p.matches(path))
}
