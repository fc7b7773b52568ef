use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use schlint_analysis::library::{MemoryLibraryStore, PinOrientation};
use schlint_analysis::{
    Component, DiagnosticBuffer, Library, Pin, PresentationConfig, Presenter, Rule, RuleFactory,
    RuleRegistry, RuleRunner, RunOptions, SuppressionTable,
};
use schlint_core::errors::RuleError;

fn pin_strategy() -> impl Strategy<Value = Pin> {
    (
        "[A-Z~]{1,4}",
        1u32..64,
        -1000i64..1000,
        -1000i64..1000,
        0i64..500,
    )
        .prop_map(|(name, number, posx, posy, length)| Pin {
            name,
            number: number.to_string(),
            posx,
            posy,
            length,
            orientation: PinOrientation::Right,
            extra: Default::default(),
        })
}

fn component_strategy() -> impl Strategy<Value = Component> {
    ("[A-Z][A-Z0-9]{0,7}", "[A-Z0-9 ]{0,3}", prop::collection::vec(pin_strategy(), 0..8))
        .prop_map(|(name, reference, pins)| Component {
            name,
            reference,
            fields: Default::default(),
            pins,
            extra: Default::default(),
        })
}

fn library_strategy() -> impl Strategy<Value = Library> {
    prop::collection::btree_map("[A-Z][A-Z0-9]{0,7}", component_strategy(), 0..6).prop_map(
        |components| {
            let components = components
                .into_iter()
                .map(|(name, mut component)| {
                    component.name = name;
                    component
                })
                .collect();
            Library::new("lib", components)
        },
    )
}

fn run(library: &Library, options: &RunOptions, suppressions: &SuppressionTable) -> (String, String) {
    let store = MemoryLibraryStore::new().with_library(library.clone());
    let mut presenter = Presenter::new(
        PresentationConfig {
            verbosity: 3,
            ..Default::default()
        },
        Vec::new(),
    );
    let outcome = RuleRunner::default()
        .run(&store, &["lib".to_string()], suppressions, options, &mut presenter)
        .unwrap();
    (
        outcome.report.to_json().unwrap(),
        String::from_utf8(presenter.into_inner()).unwrap(),
    )
}

struct Counting(Arc<AtomicUsize>);

struct CountingCheck {
    calls: Arc<AtomicUsize>,
    diagnostics: DiagnosticBuffer,
}

impl Rule for CountingCheck {
    fn check(&mut self) -> Result<bool, RuleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    fn fix(&mut self) -> Result<(), RuleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn diagnostics(&self) -> &DiagnosticBuffer {
        &self.diagnostics
    }
}

impl RuleFactory for Counting {
    fn id(&self) -> &str {
        "COUNT"
    }

    fn description(&self) -> &str {
        "counts calls"
    }

    fn bind<'c>(&self, _component: &'c mut Component) -> Box<dyn Rule + 'c> {
        Box::new(CountingCheck {
            calls: self.0.clone(),
            diagnostics: DiagnosticBuffer::new(),
        })
    }
}

proptest! {
    #[test]
    fn runs_are_deterministic(library in library_strategy(), extra in any::<bool>()) {
        let options = RunOptions { extra, ..Default::default() };
        let first = run(&library, &options, &SuppressionTable::empty());
        let second = run(&library, &options, &SuppressionTable::empty());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn check_is_idempotent(mut component in component_strategy()) {
        for factory in RuleRegistry::standard().iter().chain(RuleRegistry::extra().iter()) {
            let mut rule = factory.bind(&mut component);
            let first = rule.check().unwrap();
            let first_diagnostics = rule.diagnostics().clone();
            let second = rule.check().unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(&first_diagnostics, rule.diagnostics());
        }
    }

    #[test]
    fn standard_fixes_clear_their_violations(mut component in component_strategy()) {
        for factory in RuleRegistry::standard().iter() {
            factory.bind(&mut component).fix().unwrap();
            prop_assert!(!factory.bind(&mut component).check().unwrap(), "{} still violated", factory.id());
        }
    }

    #[test]
    fn every_component_is_reported(library in library_strategy()) {
        let store = MemoryLibraryStore::new().with_library(library.clone());
        let outcome = RuleRunner::default()
            .run(
                &store,
                &["lib".to_string()],
                &SuppressionTable::empty(),
                &RunOptions { extra: true, ..Default::default() },
                &mut Presenter::new(PresentationConfig::default(), std::io::sink()),
            )
            .unwrap();
        for component in &library.components {
            let violations = outcome.report.violations("lib", &component.name);
            prop_assert!(violations.is_some());
            let mut ids = violations.unwrap().to_vec();
            let total = ids.len();
            ids.dedup();
            prop_assert_eq!(ids.len(), total);
        }
    }

    #[test]
    fn suppressed_rule_is_never_invoked(
        library in library_strategy(),
        fix in any::<bool>(),
    ) {
        let calls = Arc::new(AtomicUsize::new(0));
        let runner = RuleRunner::new(
            RuleRegistry::new().with(Counting(calls.clone())),
            RuleRegistry::new(),
        );
        let suppressions: SuppressionTable = library
            .components
            .iter()
            .map(|c| ("lib", c.name.as_str(), "COUNT"))
            .collect();
        let store = MemoryLibraryStore::new().with_library(library.clone());

        let outcome = runner
            .run(
                &store,
                &["lib".to_string()],
                &suppressions,
                &RunOptions { fix, ..Default::default() },
                &mut Presenter::new(PresentationConfig::default(), std::io::sink()),
            )
            .unwrap();

        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
        prop_assert_eq!(outcome.report.total_violations(), 0);
        prop_assert_eq!(outcome.stats.rules_suppressed, library.components.len());
    }
}
