//! Generated-to-template line mapping
//!
//!     rustc has no `#line` directive, so the `//@line` markers in generated code are only a hint
//!     for humans. The source map is the machine-readable counterpart: for every template line
//!     it records the first generated line produced for it. Tools use it to point rustc
//!     diagnostics back at the template.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// 1-based line in the generated file
    pub generated: usize,
    /// 1-based line in the template
    pub template: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMap {
    /// Template file name as given to the compiler
    pub source: String,
    /// Ordered by `generated`
    pub mappings: Vec<Mapping>,
}

impl SourceMap {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            mappings: Vec::new(),
        }
    }

    pub fn record(&mut self, generated: usize, template: usize) {
        self.mappings.push(Mapping {
            generated,
            template,
        });
    }

    /// Template line responsible for a generated line, if the line comes after the header.
    pub fn template_line(&self, generated: usize) -> Option<usize> {
        let index = self
            .mappings
            .partition_point(|mapping| mapping.generated <= generated);
        index
            .checked_sub(1)
            .map(|found| self.mappings[found].template)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SourceMap {
        let mut map = SourceMap::new("page.kiste");
        map.record(5, 1);
        map.record(30, 2);
        map.record(31, 3);
        map
    }

    #[test]
    fn test_lookup_uses_closest_preceding_mapping() {
        let map = sample();
        assert_eq!(map.template_line(4), None);
        assert_eq!(map.template_line(5), Some(1));
        assert_eq!(map.template_line(17), Some(1));
        assert_eq!(map.template_line(31), Some(3));
        assert_eq!(map.template_line(400), Some(3));
    }

    #[test]
    fn test_json_round_trip() {
        let map = sample();
        let json = map.to_json().unwrap();
        assert!(json.contains("\"source\": \"page.kiste\""));
        let back: SourceMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
