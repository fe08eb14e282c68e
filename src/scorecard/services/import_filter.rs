/// ImportFilter decides which imports need a scorecard lookup.
///
/// Standard library packages (no `.` anywhere in the path) and packages of
/// the module being linted are skipped.
#[derive(Debug, Clone, Default)]
pub struct ImportFilter {
    module_path: Option<String>,
}

impl ImportFilter {
    pub fn new(module_path: Option<String>) -> Self {
        Self {
            module_path: module_path.filter(|path| !path.is_empty()),
        }
    }

    pub fn should_check(&self, import_path: &str) -> bool {
        if !import_path.contains('.') {
            return false;
        }

        match &self.module_path {
            Some(module) => !import_path.starts_with(module.as_str()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_library_is_skipped() {
        let filter = ImportFilter::new(None);
        assert!(!filter.should_check("fmt"));
        assert!(!filter.should_check("net/http"));
        assert!(!filter.should_check("encoding/json"));
    }

    #[test]
    fn test_third_party_is_checked() {
        let filter = ImportFilter::new(Some("example.com/me/app".to_string()));
        assert!(filter.should_check("github.com/spf13/cobra"));
        assert!(filter.should_check("gopkg.in/yaml.v3"));
    }

    #[test]
    fn test_own_module_is_skipped() {
        let filter = ImportFilter::new(Some("example.com/me/app".to_string()));
        assert!(!filter.should_check("example.com/me/app"));
        assert!(!filter.should_check("example.com/me/app/internal/scorecard"));
    }

    #[test]
    fn test_empty_module_path_skips_nothing_extra() {
        let filter = ImportFilter::new(Some(String::new()));
        assert!(filter.should_check("github.com/org/lib"));
    }
}
