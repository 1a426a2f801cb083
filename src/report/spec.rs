//! Plot specifications
//!
//! The report always produces the same six plots per result file:
//! objective value against each of the six similarity columns. Each spec
//! carries an explicit classification (similarity basis, reference kind)
//! rather than deriving behavior from column-name substrings, so renaming
//! a column cannot silently change plot semantics.

/// Whether a similarity column measures shared edges or shared nodes
///
/// Node similarities live in a much narrower band than edge similarities,
/// so the two get different y-axis floors to stay visually comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityBasis {
    Edges,
    Nodes,
}

/// Which reference objective the vertical line marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Mean objective over all local optima
    Average,
    /// Minimum objective over the sampled set. Plots against this
    /// reference exclude the best-of-1000 solution itself, so the point
    /// is not drawn as a "local optimum" next to its own line.
    BestOf1000,
    /// Externally supplied optimum; suppressed when the
    /// `BestKnownObjective` column is absent.
    BestKnown,
}

/// One of the six scatter plots generated per result file
///
/// The x column is always `Objective`.
#[derive(Debug, Clone, Copy)]
pub struct PlotSpec {
    /// Similarity column plotted on the y axis
    pub y_column: &'static str,
    pub basis: SimilarityBasis,
    pub reference: ReferenceKind,
    /// Human-readable half of the plot title
    title_fragment: &'static str,
}

impl PlotSpec {
    /// The fixed set of six plots - always exactly these
    pub const ALL: [PlotSpec; 6] = [
        PlotSpec {
            y_column: "SimAvgEdges",
            basis: SimilarityBasis::Edges,
            reference: ReferenceKind::Average,
            title_fragment: "Avg Similarity (Edges)",
        },
        PlotSpec {
            y_column: "SimAvgNodes",
            basis: SimilarityBasis::Nodes,
            reference: ReferenceKind::Average,
            title_fragment: "Avg Similarity (Nodes)",
        },
        PlotSpec {
            y_column: "SimBest1000Edges",
            basis: SimilarityBasis::Edges,
            reference: ReferenceKind::BestOf1000,
            title_fragment: "Similarity to Best of 1000 (Edges)",
        },
        PlotSpec {
            y_column: "SimBest1000Nodes",
            basis: SimilarityBasis::Nodes,
            reference: ReferenceKind::BestOf1000,
            title_fragment: "Similarity to Best of 1000 (Nodes)",
        },
        PlotSpec {
            y_column: "SimBestKnownEdges",
            basis: SimilarityBasis::Edges,
            reference: ReferenceKind::BestKnown,
            title_fragment: "Similarity to Best Known (Edges)",
        },
        PlotSpec {
            y_column: "SimBestKnownNodes",
            basis: SimilarityBasis::Nodes,
            reference: ReferenceKind::BestKnown,
            title_fragment: "Similarity to Best Known (Nodes)",
        },
    ];

    /// Full plot title with the instance name interpolated
    pub fn title(&self, instance: &str) -> String {
        format!(
            "Instance {}: Objective vs {}",
            instance, self.title_fragment
        )
    }

    /// Lower y-axis bound: 70 for node similarities, 10 for edges
    pub fn y_floor(&self) -> f64 {
        match self.basis {
            SimilarityBasis::Nodes => 70.0,
            SimilarityBasis::Edges => 10.0,
        }
    }

    /// Whether the best-of-1000 row is excluded from the scatter
    pub fn excludes_best_of_1000(&self) -> bool {
        self.reference == ReferenceKind::BestOf1000
    }

    /// Short name used in the per-column correlation summary
    pub fn correlation_name(&self) -> String {
        let reference = match self.reference {
            ReferenceKind::Average => "Avg",
            ReferenceKind::BestOf1000 => "Best1000",
            ReferenceKind::BestKnown => "BestKnown",
        };
        let basis = match self.basis {
            SimilarityBasis::Edges => "Edges",
            SimilarityBasis::Nodes => "Nodes",
        };
        format!("{} {}", reference, basis)
    }
}

/// Turn a plot title into a filesystem-safe PNG stem
///
/// Spaces become underscores; colons and parentheses are dropped.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            ':' | '(' | ')' => None,
            other => Some(other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_exactly_six_specs() {
        assert_eq!(PlotSpec::ALL.len(), 6);
        // One spec per similarity column, each appearing once
        let columns: Vec<&str> = PlotSpec::ALL.iter().map(|s| s.y_column).collect();
        assert_eq!(
            columns,
            vec![
                "SimAvgEdges",
                "SimAvgNodes",
                "SimBest1000Edges",
                "SimBest1000Nodes",
                "SimBestKnownEdges",
                "SimBestKnownNodes",
            ]
        );
    }

    #[test]
    fn test_y_floor_by_basis() {
        for spec in &PlotSpec::ALL {
            let expected = match spec.basis {
                SimilarityBasis::Nodes => 70.0,
                SimilarityBasis::Edges => 10.0,
            };
            assert_eq!(spec.y_floor(), expected, "floor for {}", spec.y_column);
        }
    }

    #[test]
    fn test_only_best1000_specs_exclude_best_row() {
        let excluded: Vec<&str> = PlotSpec::ALL
            .iter()
            .filter(|s| s.excludes_best_of_1000())
            .map(|s| s.y_column)
            .collect();
        assert_eq!(excluded, vec!["SimBest1000Edges", "SimBest1000Nodes"]);
    }

    #[test]
    fn test_title_interpolation() {
        let spec = &PlotSpec::ALL[0];
        assert_eq!(
            spec.title("A"),
            "Instance A: Objective vs Avg Similarity (Edges)"
        );
    }

    #[test]
    fn test_sanitize_title() {
        assert_eq!(
            sanitize_title("Instance A: Objective vs Avg Similarity (Edges)"),
            "Instance_A_Objective_vs_Avg_Similarity_Edges"
        );
    }

    #[test]
    fn test_correlation_names() {
        let names: Vec<String> = PlotSpec::ALL.iter().map(|s| s.correlation_name()).collect();
        assert_eq!(
            names,
            vec![
                "Avg Edges",
                "Avg Nodes",
                "Best1000 Edges",
                "Best1000 Nodes",
                "BestKnown Edges",
                "BestKnown Nodes",
            ]
        );
    }
}
