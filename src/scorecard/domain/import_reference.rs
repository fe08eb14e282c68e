/// An import path together with where it appears in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReference {
    path: String,
    line: usize,
    column: usize,
}

impl ImportReference {
    pub fn new(path: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 1-based line of the import spec.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the import spec.
    pub fn column(&self) -> usize {
        self.column
    }
}
