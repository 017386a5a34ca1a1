use std::sync::Arc;
use std::thread;
use stockroom_core::{KeyedRepository, RepoError, SharedRepository, StockItem};

#[test]
fn concurrent_adds_of_same_key_admit_exactly_one() {
    let repo = Arc::new(SharedRepository::<StockItem>::new());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                repo.add(StockItem::electronic(
                    1,
                    format!("Mouse {worker}"),
                    worker,
                    "Logitech",
                    12,
                ))
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|result| result.as_ref().err())
        .all(|err| *err == RepoError::DuplicateKey(1)));
    assert_eq!(repo.len(), 1);
}

#[test]
fn concurrent_distinct_adds_all_succeed() {
    let repo = Arc::new(SharedRepository::<StockItem>::new());

    let handles: Vec<_> = (1..=16)
        .map(|id| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || repo.add(StockItem::electronic(id, "Cable", 1, "Anker", 6)))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(repo.len(), 16);
    assert!(repo.contains(16));
}

#[test]
fn shared_repository_keeps_error_precedence_and_returns_clones() {
    let repo = SharedRepository::from_repository(
        KeyedRepository::try_from_seed([StockItem::electronic(2, "Charger", 30, "Anker", 12)])
            .unwrap(),
    );

    assert!(matches!(
        repo.update_quantity(404, -3),
        Err(RepoError::InvalidValue(_))
    ));
    assert_eq!(repo.update_quantity(404, 3), Err(RepoError::NotFound(404)));

    repo.update_quantity(2, 29).unwrap();
    let mut copy = repo.get_by_id(2).unwrap();
    copy.quantity = 0;
    assert_eq!(repo.get_by_id(2).unwrap().quantity, 29);

    let total: i64 = repo.with(|inner| inner.iter().map(|item| item.quantity).sum());
    assert_eq!(total, 29);

    let removed = repo.remove(2).unwrap();
    assert_eq!(removed.name, "Charger");
    assert!(repo.is_empty());
    assert!(repo.into_inner().is_empty());
}
