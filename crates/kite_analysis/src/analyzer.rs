//! The analyzer: owns the registered checkers and runs them over a tree.

use crate::checker::{CheckContext, DeclarationChecker};
use crate::checkers::register_builtin_checkers;
use crate::names::TargetNames;
use kite_config::AnalysisConfig;
use kite_decl::{DeclKind, DeclTree, Declaration};
use kite_diagnostics::DiagnosticSink;
use rayon::prelude::*;

/// Runs every registered checker on every declaration of a tree.
///
/// Filtering by severity and by diagnostic name happens in the
/// [`DiagnosticSink`]; suppression annotations are honored by
/// [`CheckContext::report`].
pub struct Analyzer {
    checkers: Vec<Box<dyn DeclarationChecker>>,
    parallel: bool,
}

impl Analyzer {
    /// Creates an analyzer with all built-in checkers registered.
    pub fn new(config: &AnalysisConfig) -> Self {
        let mut analyzer = Self {
            checkers: Vec::new(),
            parallel: config.parallel,
        };
        register_builtin_checkers(&mut analyzer);
        analyzer
    }

    /// Creates an analyzer with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(&AnalysisConfig::default())
    }

    /// Registers a checker.
    pub fn register(&mut self, checker: Box<dyn DeclarationChecker>) {
        self.checkers.push(checker);
    }

    /// Returns the number of registered checkers.
    pub fn checker_count(&self) -> usize {
        self.checkers.len()
    }

    /// Returns the names of all registered checkers.
    pub fn checker_names(&self) -> Vec<&str> {
        self.checkers.iter().map(|c| c.name()).collect()
    }

    /// Checks every declaration of `tree`, reporting into `sink`.
    ///
    /// Emission order depends on scheduling when running in parallel; use
    /// [`DiagnosticSink::take_sorted`] for stable output.
    pub fn run(&self, tree: &DeclTree, sink: &DiagnosticSink) {
        let _span = tracing::info_span!("analyze", declarations = tree.len()).entered();
        let names = TargetNames::compute(tree);
        let cx = CheckContext::new(tree, &names, sink);

        let check = |decl: &Declaration| {
            if decl.kind == DeclKind::File {
                return;
            }
            for checker in &self.checkers {
                checker.check(decl, &cx);
            }
        };
        if self.parallel {
            tree.as_slice().par_iter().for_each(check);
        } else {
            tree.as_slice().iter().for_each(check);
        }

        tracing::info!(
            diagnostics = sink.len(),
            errors = sink.error_count(),
            "analysis finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kite_diagnostics::Diagnostic;
    use kite_source::{FileId, Span};

    fn sp(start: u32, end: u32) -> Span {
        Span::new(FileId::from_raw(0), start, end)
    }

    fn sample_tree() -> DeclTree {
        let mut tree = DeclTree::new();
        let file = tree.add_file("app", sp(0, 200));
        tree.add(file, DeclKind::Function, "main", sp(0, 20));
        tree.add(file, DeclKind::Function, "main2", sp(20, 60))
            .target_name("main", sp(20, 38));
        tree.add(file, DeclKind::Function, "helper", sp(60, 80))
            .modifier("private", sp(60, 67));
        tree.add(file, DeclKind::Function, "again", sp(80, 120))
            .target_name("again", sp(80, 99));
        let class = tree.add(file, DeclKind::Class, "Box", sp(120, 200)).id();
        tree.add(class, DeclKind::Property, "switch", sp(130, 160));
        tree
    }

    fn run(parallel: bool, tree: &DeclTree) -> Vec<Diagnostic> {
        let analyzer = Analyzer::new(&AnalysisConfig { parallel });
        let sink = DiagnosticSink::new();
        analyzer.run(tree, &sink);
        sink.take_sorted()
    }

    #[test]
    fn builtin_checkers_registered() {
        let analyzer = Analyzer::with_defaults();
        assert_eq!(analyzer.checker_count(), 3);
        assert_eq!(
            analyzer.checker_names(),
            vec!["name-clash", "target-name", "implicit-rename"]
        );
    }

    #[test]
    fn reports_every_kind_of_problem() {
        let tree = sample_tree();
        let names: Vec<_> = run(false, &tree).iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec![
                "NAME_CLASH",
                "NAME_CLASH",
                "IMPLICITLY_RENAMED",
                "REDUNDANT_TARGET_NAME",
                "TARGET_NAME_IS_RESERVED",
            ]
        );
    }

    #[test]
    fn parallel_matches_sequential() {
        let tree = sample_tree();
        assert_eq!(run(true, &tree), run(false, &tree));
    }

    #[test]
    fn custom_checker_skips_files() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static SEEN: AtomicUsize = AtomicUsize::new(0);

        struct Counting;
        impl DeclarationChecker for Counting {
            fn name(&self) -> &str {
                "counting"
            }
            fn description(&self) -> &str {
                "counts declarations"
            }
            fn check(&self, decl: &Declaration, _cx: &CheckContext<'_>) {
                assert_ne!(decl.kind, DeclKind::File);
                SEEN.fetch_add(1, Ordering::Relaxed);
            }
        }

        let tree = sample_tree();
        let mut analyzer = Analyzer::with_defaults();
        analyzer.register(Box::new(Counting));
        assert_eq!(analyzer.checker_count(), 4);
        analyzer.run(&tree, &DiagnosticSink::new());
        assert_eq!(SEEN.load(Ordering::Relaxed), tree.len() - 1);
    }
}
