use super::*;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use shot_sorter_catalog::load_catalog;
use shot_sorter_steam::LookupError;
use tempfile::TempDir;

struct ScriptedSource {
    replies: RefCell<VecDeque<Result<LookupOutcome, LookupError>>>,
    calls: Cell<usize>,
}

impl ScriptedSource {
    fn new(replies: Vec<Result<LookupOutcome, LookupError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            calls: Cell::new(0),
        }
    }
}

impl MetadataSource for ScriptedSource {
    fn app_details(&self, _id: GameId) -> Result<LookupOutcome, LookupError> {
        self.calls.set(self.calls.get() + 1);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(LookupOutcome::NotFound))
    }
}

struct ScriptedPrompter {
    decision: Decision,
    seen: Vec<(GameId, Option<Prediction>)>,
}

impl ScriptedPrompter {
    fn new(decision: Decision) -> Self {
        Self {
            decision,
            seen: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, id: GameId, prediction: Option<&Prediction>) -> Decision {
        self.seen.push((id, prediction.cloned()));
        self.decision.clone()
    }
}

fn test_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.push(CatalogEntry::new(GameId(612880), "Test Game", 2020));
    catalog.push(CatalogEntry::new(GameId(1), "Yearless", 0));
    catalog
}

fn options(dir: &TempDir, policy: UnresolvedPolicy) -> ResolverOptions {
    let mut options = ResolverOptions::new(policy, dir.path().join("game-ids.json"));
    options.retry_delay = Duration::ZERO;
    options.max_retries = 2;
    options
}

fn found(name: &str, year: Option<u32>) -> Result<LookupOutcome, LookupError> {
    Ok(LookupOutcome::Found(Prediction::new(name, year)))
}

#[test]
fn test_catalog_hit_skips_store() {
    let tmp = TempDir::new().unwrap();
    let source = ScriptedSource::new(vec![]);
    let mut prompter = DeclineAll;
    let mut resolver = GameResolver::new(
        test_catalog(),
        &source,
        &mut prompter,
        options(&tmp, UnresolvedPolicy::Abort),
    );

    let folder = resolver.resolve(GameId(612880)).unwrap();
    assert_eq!(folder.dir_name(), "Test Game (2020)");
    assert_eq!(resolver.resolve(GameId(1)).unwrap().dir_name(), "Yearless");
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn test_store_hit_is_memoized_and_not_persisted() {
    let tmp = TempDir::new().unwrap();
    let source = ScriptedSource::new(vec![found("Marvel Rivals", Some(2024))]);
    let mut prompter = DeclineAll;
    let mut resolver = GameResolver::new(
        test_catalog(),
        &source,
        &mut prompter,
        options(&tmp, UnresolvedPolicy::Abort),
    );

    for _ in 0..3 {
        let folder = resolver.resolve(GameId(2767030)).unwrap();
        assert_eq!(folder.dir_name(), "Marvel Rivals (2024)");
    }
    assert_eq!(source.calls.get(), 1);
    assert_eq!(resolver.store_requests(), 1);
    assert!(!resolver.catalog().contains(GameId(2767030)));
    assert!(!tmp.path().join("game-ids.json").exists());
}

#[test]
fn test_unattended_not_found_aborts() {
    let tmp = TempDir::new().unwrap();
    let source = ScriptedSource::new(vec![Ok(LookupOutcome::NotFound)]);
    let mut prompter = DeclineAll;
    let mut resolver = GameResolver::new(
        test_catalog(),
        &source,
        &mut prompter,
        options(&tmp, UnresolvedPolicy::Abort),
    );

    let err = resolver.resolve(GameId(99)).unwrap_err();
    assert!(matches!(err, SyncError::UnresolvedGame { id } if id == GameId(99)));
}

#[test]
fn test_unattended_yearless_prediction_aborts() {
    let tmp = TempDir::new().unwrap();
    let source = ScriptedSource::new(vec![found("Soon", None)]);
    let mut prompter = ScriptedPrompter::new(Decision::Accept);
    let mut resolver = GameResolver::new(
        test_catalog(),
        &source,
        &mut prompter,
        options(&tmp, UnresolvedPolicy::Abort),
    );

    assert!(matches!(
        resolver.resolve(GameId(5)),
        Err(SyncError::UnresolvedGame { .. })
    ));
    drop(resolver);
    assert!(prompter.seen.is_empty());
}

#[test]
fn test_prompt_accept_writes_prediction_and_requires_rerun() {
    let tmp = TempDir::new().unwrap();
    let source = ScriptedSource::new(vec![found("Soon", None)]);
    let mut prompter = ScriptedPrompter::new(Decision::Accept);
    let opts = options(&tmp, UnresolvedPolicy::Prompt);
    let catalog_path = opts.catalog_path.clone();
    let mut resolver = GameResolver::new(test_catalog(), &source, &mut prompter, opts);

    let err = resolver.resolve(GameId(5)).unwrap_err();
    assert!(err.is_rerun_required());
    assert!(resolver.catalog().contains(GameId(5)));
    drop(resolver);

    assert_eq!(
        prompter.seen,
        vec![(GameId(5), Some(Prediction::new("Soon", None)))]
    );
    let saved = load_catalog(&catalog_path).unwrap();
    assert_eq!(saved.games, vec![CatalogEntry::new(GameId(5), "Soon", 0)]);
}

#[test]
fn test_prompt_accept_without_prediction_is_unresolved() {
    let tmp = TempDir::new().unwrap();
    let source = ScriptedSource::new(vec![Ok(LookupOutcome::NotFound)]);
    let mut prompter = ScriptedPrompter::new(Decision::Accept);
    let opts = options(&tmp, UnresolvedPolicy::Prompt);
    let catalog_path = opts.catalog_path.clone();
    let mut resolver = GameResolver::new(test_catalog(), &source, &mut prompter, opts);

    assert!(matches!(
        resolver.resolve(GameId(5)),
        Err(SyncError::UnresolvedGame { .. })
    ));
    assert!(!catalog_path.exists());
}

#[test]
fn test_prompt_correction_is_stored() {
    let tmp = TempDir::new().unwrap();
    let source = ScriptedSource::new(vec![Ok(LookupOutcome::NotFound)]);
    let mut prompter = ScriptedPrompter::new(Decision::Correct {
        name: "  My Shortcut ".to_string(),
        year: 2011,
    });
    let opts = options(&tmp, UnresolvedPolicy::Prompt);
    let catalog_path = opts.catalog_path.clone();
    let mut resolver = GameResolver::new(test_catalog(), &source, &mut prompter, opts);

    match resolver.resolve(GameId(77)) {
        Err(SyncError::RerunRequired { id, folder }) => {
            assert_eq!(id, GameId(77));
            assert_eq!(folder, "My Shortcut (2011)");
        }
        other => panic!("expected RerunRequired, got {other:?}"),
    }
    let saved = load_catalog(&catalog_path).unwrap();
    assert_eq!(saved.games[0], CatalogEntry::new(GameId(77), "My Shortcut", 2011));
}

#[test]
fn test_prompt_decline_leaves_catalog_alone() {
    let tmp = TempDir::new().unwrap();
    let source = ScriptedSource::new(vec![Ok(LookupOutcome::NotFound)]);
    let mut prompter = ScriptedPrompter::new(Decision::Decline);
    let opts = options(&tmp, UnresolvedPolicy::Prompt);
    let catalog_path = opts.catalog_path.clone();
    let mut resolver = GameResolver::new(test_catalog(), &source, &mut prompter, opts);

    assert!(matches!(
        resolver.resolve(GameId(77)),
        Err(SyncError::UnresolvedGame { .. })
    ));
    assert!(!catalog_path.exists());
}

#[test]
fn test_prompt_duplicate_in_file_is_unresolved() {
    let tmp = TempDir::new().unwrap();
    let opts = options(&tmp, UnresolvedPolicy::Prompt);
    let original = r#"{"games":[{"id":77,"name":"Already There","year":0}]}"#;
    std::fs::write(&opts.catalog_path, original).unwrap();
    let catalog_path = opts.catalog_path.clone();

    let source = ScriptedSource::new(vec![Ok(LookupOutcome::NotFound)]);
    let mut prompter = ScriptedPrompter::new(Decision::Correct {
        name: "Other".to_string(),
        year: 0,
    });
    let mut resolver = GameResolver::new(Catalog::new(), &source, &mut prompter, opts);

    assert!(matches!(
        resolver.resolve(GameId(77)),
        Err(SyncError::UnresolvedGame { .. })
    ));
    assert_eq!(std::fs::read_to_string(&catalog_path).unwrap(), original);
}

#[test]
fn test_malformed_response_is_retried() {
    let tmp = TempDir::new().unwrap();
    let source = ScriptedSource::new(vec![
        Err(LookupError::malformed("null body")),
        found("Recovered", Some(2019)),
    ]);
    let mut prompter = DeclineAll;
    let mut resolver = GameResolver::new(
        Catalog::new(),
        &source,
        &mut prompter,
        options(&tmp, UnresolvedPolicy::Abort),
    );

    assert_eq!(
        resolver.resolve(GameId(3)).unwrap().dir_name(),
        "Recovered (2019)"
    );
    assert_eq!(source.calls.get(), 2);
}

#[test]
fn test_malformed_retries_are_bounded() {
    let tmp = TempDir::new().unwrap();
    let source = ScriptedSource::new(vec![
        Err(LookupError::malformed("null body")),
        Err(LookupError::malformed("null body")),
        Err(LookupError::malformed("null body")),
        found("Too Late", Some(2019)),
    ]);
    let mut prompter = DeclineAll;
    let mut resolver = GameResolver::new(
        Catalog::new(),
        &source,
        &mut prompter,
        options(&tmp, UnresolvedPolicy::Abort),
    );

    match resolver.resolve(GameId(3)) {
        Err(SyncError::MalformedResponse { attempts, .. }) => assert_eq!(attempts, 3),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
    assert_eq!(source.calls.get(), 3);
}
