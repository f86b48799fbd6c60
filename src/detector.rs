use crate::extractor::Framework;
use crate::type_resolver::Import;
use log::debug;

/// Framework detector for classifying which web framework idiom a Java file follows.
///
/// Detection is a plain substring check over the file's imports: a file importing anything
/// whose qualified name contains the Spring marker (`org.springframework` by default) is
/// classified as [`Framework::Spring`], every other file as [`Framework::Default`].
/// Wildcard and static imports count as well.
pub struct FrameworkDetector {
    spring_marker: String,
}

impl FrameworkDetector {
    pub fn new(spring_marker: &str) -> Self {
        Self {
            spring_marker: spring_marker.to_string(),
        }
    }

    /// Classifies a file from its imports.
    ///
    /// # Example
    ///
    /// ```
    /// use blueprints_from_source::detector::FrameworkDetector;
    /// use blueprints_from_source::extractor::Framework;
    /// use blueprints_from_source::type_resolver::Import;
    ///
    /// let import = Import {
    ///     qualified_name: "org.springframework.web.bind.annotation.RestController".to_string(),
    ///     is_static: false,
    ///     is_wildcard: false,
    /// };
    /// let detector = FrameworkDetector::default();
    /// assert_eq!(detector.detect(&[import]), Framework::Spring);
    /// ```
    pub fn detect(&self, imports: &[Import]) -> Framework {
        if self.spring_marker.is_empty() {
            return Framework::Default;
        }

        let framework = if imports
            .iter()
            .any(|import| import.qualified_name.contains(&self.spring_marker))
        {
            Framework::Spring
        } else {
            Framework::Default
        };

        debug!("Detected framework {:?} from {} imports", framework, imports.len());
        framework
    }
}

impl Default for FrameworkDetector {
    fn default() -> Self {
        Self::new("org.springframework")
    }
}
