//! Integration tests running translated predicates against SQLite.
//!
//! SQLite has no `YEAR`, `MONTH` or `DAY` functions, so the date-part
//! operations are only covered by the translation unit tests.

use rusqlite::{Connection, params_from_iter};

use helios_paging::search::translate;
use helios_paging::{Page, PaginationQuery, PlaceholderStyle, QueryValues, SearchError};

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: i64,
    name: String,
}

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            surname TEXT NOT NULL,
            age INTEGER NOT NULL,
            department TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        INSERT INTO users VALUES (1, 'John', 'Smith', 34, 'dev', '2016-08-01');
        INSERT INTO users VALUES (2, 'Jill', 'Doe', 17, 'ops', '2016-08-10');
        INSERT INTO users VALUES (3, 'Paul', 'Johnson', 52, 'dev', '2016-09-02');
        INSERT INTO users VALUES (4, 'Ammar', 'Hasan', 28, 'management', '2017-01-15');
        INSERT INTO users VALUES (5, 'Jo', 'Mills', 18, 'devops', '2016-08-07');",
    )
    .unwrap();
    conn
}

/// Runs the list query a handler would build for `url`.
fn fetch(conn: &Connection, url: &str) -> Result<Vec<User>, SearchError> {
    let query = QueryValues::from_url(url);
    let paging = PaginationQuery::from_query(&query).unwrap();
    let predicate = translate(&query)?;

    let mut sql = String::from("SELECT id, name FROM users");
    let mut params = Vec::new();
    if let Some(predicate) = predicate {
        sql.push_str(" WHERE ");
        sql.push_str(&predicate.to_sql_with(PlaceholderStyle::Numbered { offset: 0 }));
        params = predicate.parameters();
    }
    sql.push_str(&format!(
        " ORDER BY {} LIMIT {} OFFSET {}",
        paging.order(),
        paging.limit(),
        paging.offset()
    ));

    let mut stmt = conn.prepare(&sql).unwrap();
    let users = stmt
        .query_map(params_from_iter(params.iter()), |row| {
            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    Ok(users)
}

fn ids(users: &[User]) -> Vec<i64> {
    users.iter().map(|u| u.id).collect()
}

#[test]
fn test_and_conditions() {
    let conn = setup();
    let users = fetch(
        &conn,
        "/users?name__startswith=J&age__gthanorequals=18&searchOperator=AND&order_by=id",
    )
    .unwrap();
    assert_eq!(ids(&users), vec![1, 5]);
}

#[test]
fn test_or_conditions() {
    let conn = setup();
    let users = fetch(
        &conn,
        "/users?name__equals=Ammar&age__lessthan=18&searchOperator=OR&order_by=id",
    )
    .unwrap();
    assert_eq!(ids(&users), vec![2, 4]);
}

#[test]
fn test_like_operations() {
    let conn = setup();

    let users = fetch(&conn, "/users?surname__endswith=son&order_by=id").unwrap();
    assert_eq!(ids(&users), vec![3]);

    let users = fetch(&conn, "/users?department__contains=dev&order_by=id").unwrap();
    assert_eq!(ids(&users), vec![1, 3, 5]);
}

#[test]
fn test_date_comparisons() {
    let conn = setup();
    let users = fetch(
        &conn,
        "/users?created_at__after=2016-08-05&created_at__before=2016-12-31&searchOperator=AND&order_by=id",
    )
    .unwrap();
    assert_eq!(ids(&users), vec![2, 3, 5]);
}

#[test]
fn test_no_conditions_returns_everything() {
    let conn = setup();
    let users = fetch(&conn, "/users").unwrap();
    // Default ordering is created_at ascending.
    assert_eq!(ids(&users), vec![1, 5, 2, 3, 4]);
}

#[test]
fn test_ordering_and_offset() {
    let conn = setup();
    let users = fetch(&conn, "/users?order_by=age&order=desc&page=2&limit=2").unwrap();
    assert_eq!(ids(&users), vec![4, 5]);
}

#[test]
fn test_values_are_bound_not_interpolated() {
    let conn = setup();
    let users = fetch(&conn, "/users?name__equals=x%27%20OR%20%271%27%3D%271").unwrap();
    assert!(users.is_empty());
}

#[test]
fn test_search_error_stops_the_query() {
    let conn = setup();
    assert_eq!(
        fetch(&conn, "/users?name__equals=John&age__greaterthan=18"),
        Err(SearchError::MissingOperator)
    );
    assert_eq!(
        fetch(&conn, "/users?name__like=John"),
        Err(SearchError::UnknownOperation("like".to_string()))
    );
}

#[test]
fn test_walking_pages_with_links() {
    let conn = setup();
    let mut url = "/users?department__contains=dev&page=1&limit=2&order_by=id".to_string();
    let mut seen = Vec::new();
    let mut pages = 0;

    loop {
        let users = fetch(&conn, &url).unwrap();
        let page = Page::new(&url, users).unwrap();
        pages += 1;
        seen.extend(ids(&page.results));

        match page.links.next {
            Some(next) => url = next,
            None => break,
        }
        assert!(pages < 10, "pagination did not terminate");
    }

    assert_eq!(pages, 2);
    assert_eq!(seen, vec![1, 3, 5]);
}

#[test]
fn test_full_last_page_links_to_empty_page() {
    let conn = setup();
    let url = "/users?department__contains=dev&page=2&limit=2&order_by=id";
    let page = Page::new(url, fetch(&conn, url).unwrap()).unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.links.next, None);

    let url = "/users?order_by=id&page=3&limit=2";
    let page = Page::new(url, fetch(&conn, url).unwrap()).unwrap();
    assert_eq!(page.count, 1);

    // A page that happens to be exactly full still advertises a next page.
    let url = "/users?order_by=id&page=1&limit=5";
    let page = Page::new(url, fetch(&conn, url).unwrap()).unwrap();
    let next = page.links.next.clone().unwrap();
    let following = Page::new(&next, fetch(&conn, &next).unwrap()).unwrap();
    assert!(following.is_empty());
    assert_eq!(following.links.next, None);
}
