//! Class-name composition
//!
//! Fragments may hold several space-separated classes. Empty fragments and
//! fragments whose condition is false are skipped; a class seen twice is
//! kept once, at its first position.

/// Builder for a `class` attribute value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every class of `fragment`
    pub fn add(mut self, fragment: impl AsRef<str>) -> Self {
        for class in fragment.as_ref().split_whitespace() {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    /// Append `fragment` only when `condition` holds
    pub fn add_if(self, condition: bool, fragment: impl AsRef<str>) -> Self {
        if condition {
            self.add(fragment)
        } else {
            self
        }
    }

    /// Append an optional fragment, e.g. a caller-supplied class
    pub fn add_opt(self, fragment: Option<impl AsRef<str>>) -> Self {
        match fragment {
            Some(f) => self.add(f),
            None => self,
        }
    }

    pub fn add_all<I, S>(self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        fragments.into_iter().fold(self, |list, f| list.add(f))
    }

    pub fn build(self) -> String {
        self.classes.join(" ")
    }
}

/// Join unconditional fragments
pub fn cn<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ClassList::new().add_all(fragments).build()
}
