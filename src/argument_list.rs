/// The ordered arguments the program was invoked with, not including
/// the program name itself.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentList(Vec<String>);

impl ArgumentList {
    pub fn new(args: Vec<String>) -> Self {
        ArgumentList(args)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns each argument paired with its zero-based position.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.iter().enumerate()
    }
}

impl From<Vec<String>> for ArgumentList {
    fn from(value: Vec<String>) -> Self {
        ArgumentList::new(value)
    }
}

impl FromIterator<String> for ArgumentList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        ArgumentList(iter.into_iter().collect())
    }
}
