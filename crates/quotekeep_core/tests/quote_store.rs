use quotekeep_core::db::open_db_in_memory;
use quotekeep_core::{
    DbError, NewQuote, QuoteRepository, QuoteStore, RepoError, SqliteQuoteRepository,
};
use std::collections::HashSet;

const T1: i64 = 1_700_000_000_000;
const T2: i64 = 1_700_000_060_000;

fn twain_facts() -> NewQuote {
    NewQuote::new(
        "Mark Twain",
        "Get your facts first, and then you can distort them as you please.",
        T1,
    )
}

fn twain_ahead() -> NewQuote {
    NewQuote::new(
        "Mark Twain",
        "The secret of getting ahead is getting started.",
        T2,
    )
}

#[test]
fn insert_and_list_roundtrip() {
    let store = QuoteStore::open_in_memory().unwrap();

    let input = twain_facts();
    let id = store.insert_quote(&input).unwrap();

    let quotes = store.list_quotes().unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].id, id);
    assert_eq!(quotes[0].author, input.author);
    assert_eq!(quotes[0].text, input.text);
    assert_eq!(quotes[0].created_at, input.created_at);
}

#[test]
fn inserted_ids_are_unique() {
    let store = QuoteStore::open_in_memory().unwrap();

    let ids = (0..5)
        .map(|index| {
            store
                .insert_quote(&NewQuote::new("Author", format!("quote {index}"), T1 + index))
                .unwrap()
        })
        .collect::<HashSet<_>>();

    assert_eq!(ids.len(), 5);
}

#[test]
fn ids_are_not_reused_after_deleting_newest() {
    let store = QuoteStore::open_in_memory().unwrap();

    let first = store.insert_quote(&twain_facts()).unwrap();
    let second = store.insert_quote(&twain_ahead()).unwrap();
    assert!(store.delete_quote(second).unwrap());

    let third = store.insert_quote(&twain_ahead()).unwrap();
    assert_ne!(third, second);
    assert_ne!(third, first);
    assert!(third > second);
}

#[test]
fn list_on_fresh_store_is_empty() {
    let store = QuoteStore::open_in_memory().unwrap();
    assert!(store.list_quotes().unwrap().is_empty());
}

#[test]
fn list_is_reverse_chronological() {
    let store = QuoteStore::open_in_memory().unwrap();

    // Inserted out of order on purpose.
    for created_at in [T1 + 20, T1, T1 + 40, T1 + 10] {
        store
            .insert_quote(&NewQuote::new("Author", format!("at {created_at}"), created_at))
            .unwrap();
    }

    let created = store
        .list_quotes()
        .unwrap()
        .into_iter()
        .map(|quote| quote.created_at)
        .collect::<Vec<_>>();
    assert_eq!(created, vec![T1 + 40, T1 + 20, T1 + 10, T1]);
}

#[test]
fn equal_timestamps_are_ordered_by_id_descending() {
    let store = QuoteStore::open_in_memory().unwrap();

    let first = store.insert_quote(&NewQuote::new("A", "one", T1)).unwrap();
    let second = store.insert_quote(&NewQuote::new("B", "two", T1)).unwrap();

    let ids = store
        .list_quotes()
        .unwrap()
        .into_iter()
        .map(|quote| quote.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn find_by_author_substring_matches_literal_fragment() {
    let store = QuoteStore::open_in_memory().unwrap();

    let lincoln = store
        .insert_quote(&NewQuote::new("Abraham Lincoln", "Whatever you are, be a good one.", T1))
        .unwrap();
    let linda = store
        .insert_quote(&NewQuote::new("Linda Ellerbee", "People are like stained-glass windows.", T2))
        .unwrap();
    store
        .insert_quote(&NewQuote::new("Winston Churchill", "Never give in.", T2 + 1))
        .unwrap();

    let ids = store
        .find_by_author_substring("Lin")
        .unwrap()
        .into_iter()
        .map(|quote| quote.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![linda, lincoln]);

    let churchill = store.find_by_author_substring("hill").unwrap();
    assert_eq!(churchill.len(), 1);
    assert_eq!(churchill[0].author, "Winston Churchill");
}

#[test]
fn find_by_author_substring_is_case_sensitive() {
    let store = QuoteStore::open_in_memory().unwrap();
    store.insert_quote(&twain_facts()).unwrap();

    assert!(store.find_by_author_substring("twain").unwrap().is_empty());
    assert_eq!(store.find_by_author_substring("Twain").unwrap().len(), 1);
}

#[test]
fn find_by_author_substring_treats_like_wildcards_literally() {
    let store = QuoteStore::open_in_memory().unwrap();
    store.insert_quote(&twain_facts()).unwrap();
    store
        .insert_quote(&NewQuote::new("100% Anonymous", "Percent signs happen.", T2))
        .unwrap();

    let percent = store.find_by_author_substring("%").unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].author, "100% Anonymous");
    assert!(store.find_by_author_substring("_").unwrap().is_empty());
}

#[test]
fn find_with_no_match_is_empty() {
    let store = QuoteStore::open_in_memory().unwrap();
    store.insert_quote(&twain_facts()).unwrap();

    assert!(store.find_by_author_substring("Churchill").unwrap().is_empty());
}

#[test]
fn deleting_missing_id_reports_false_and_keeps_collection() {
    let store = QuoteStore::open_in_memory().unwrap();
    let id = store.insert_quote(&twain_facts()).unwrap();

    assert!(!store.delete_quote(id + 100).unwrap());
    assert_eq!(store.list_quotes().unwrap().len(), 1);

    assert!(store.delete_quote(id).unwrap());
    assert!(!store.delete_quote(id).unwrap());
    assert!(store.list_quotes().unwrap().is_empty());
}

#[test]
fn twain_scenario() {
    let store = QuoteStore::open_in_memory().unwrap();

    let older = store.insert_quote(&twain_facts()).unwrap();
    let newer = store.insert_quote(&twain_ahead()).unwrap();

    let listed = store.list_quotes().unwrap();
    assert_eq!(
        listed.iter().map(|quote| quote.id).collect::<Vec<_>>(),
        vec![newer, older]
    );

    let found = store.find_by_author_substring("Twain").unwrap();
    assert_eq!(found, listed);

    assert!(store.delete_quote(newer).unwrap());
    let remaining = store.list_quotes().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, older);
    assert_eq!(remaining[0].created_at, T1);
}

#[test]
fn quotes_survive_reopening_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.db");

    let mut store = QuoteStore::open(&path).unwrap();
    assert_eq!(store.location(), Some(path.as_path()));
    let id = store.insert_quote(&twain_facts()).unwrap();
    store.close().unwrap();

    let reopened = QuoteStore::open(&path).unwrap();
    let quotes = reopened.list_quotes().unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].id, id);
    assert_eq!(quotes[0].text, twain_facts().text);
}

#[test]
fn deletes_survive_dropping_store_without_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.db");

    {
        let store = QuoteStore::open(&path).unwrap();
        let keep = store.insert_quote(&twain_facts()).unwrap();
        let gone = store.insert_quote(&twain_ahead()).unwrap();
        assert!(store.delete_quote(gone).unwrap());
        assert_ne!(keep, gone);
    }

    let reopened = QuoteStore::open(&path).unwrap();
    let quotes = reopened.list_quotes().unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].created_at, T1);
}

#[test]
fn operations_after_close_fail_with_closed() {
    let mut store = QuoteStore::open_in_memory().unwrap();
    store.close().unwrap();
    assert!(store.is_closed());

    let err = store.list_quotes().unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Closed)));

    let err = store.insert_quote(&twain_facts()).unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Closed)));

    let err = store.find_by_author_substring("Twain").unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Closed)));

    let err = store.delete_quote(1).unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Closed)));
}

#[test]
fn closing_twice_fails_with_closed() {
    let mut store = QuoteStore::open_in_memory().unwrap();
    store.close().unwrap();

    let err = store.close().unwrap_err();
    assert!(matches!(err, DbError::Closed));
}

#[test]
fn sqlite_repository_works_on_borrowed_connection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::new(&conn);

    let id = repo.insert_quote(&twain_facts()).unwrap();
    assert_eq!(repo.list_quotes().unwrap()[0].id, id);
}

#[test]
fn rows_with_missing_text_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    // Simulate a damaged table by relaxing NOT NULL through a rebuilt table.
    conn.execute_batch(
        "DROP TABLE quotes;
         CREATE TABLE quotes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            author TEXT,
            text TEXT,
            created_at INTEGER NOT NULL
         );
         INSERT INTO quotes (author, text, created_at) VALUES ('Mark Twain', NULL, 1);",
    )
    .unwrap();

    let err = SqliteQuoteRepository::new(&conn).list_quotes().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)), "unexpected error: {err}");
}
