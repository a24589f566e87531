//! End-to-end command flows against `LibraryService`, checking the exact reply
//! wording consumers depend on.

use library_manager::{LibraryError, LibraryService, Notice};
use pretty_assertions::assert_eq;

const NAME: &str = "Clean Code";
const AUTHOR: &str = "Robert C. Martin";

fn text(outcome: Result<Notice, LibraryError>) -> String {
    match outcome {
        Ok(notice) => notice.to_string(),
        Err(err) => err.to_string(),
    }
}

fn library_with_users() -> LibraryService {
    let mut library = LibraryService::new();
    library.register("admin", "Alice", "password1").unwrap();
    library.register("user", "Bob", "password2").unwrap();
    library
}

fn stocked_library() -> LibraryService {
    let mut library = library_with_users();
    library.login("Alice", "password1").unwrap();
    library.add_book(NAME, AUTHOR, 5).unwrap();
    library.logout().unwrap();
    library
}

#[test]
fn registration() {
    let mut library = LibraryService::new();
    assert_eq!(
        text(library.register("admin", "Alice", "password1")),
        "Admin Alice successfully registered."
    );
    assert_eq!(
        text(library.register("user", "Bob", "password2")),
        "User Bob successfully registered."
    );
    assert_eq!(
        text(library.register("invalid", "Charlie", "password3")),
        "Invalid role. Role must be \"admin\" or \"user\"."
    );
    assert_eq!(
        text(library.register("user", "Bob", "password9")),
        "User Bob already exists."
    );
    assert_eq!(
        text(library.register("user", "", "password9")),
        "Invalid parameters provided."
    );
}

#[test]
fn login_and_logout() {
    let mut library = library_with_users();
    assert_eq!(
        text(library.login("Alice", "password1")),
        "Admin Alice successfully logged in."
    );
    assert_eq!(text(library.login("Alice", "wrongpassword")), "Incorrect password.");
    assert_eq!(
        text(library.login("NonExistent", "password")),
        "User NonExistent does not exist."
    );
    assert_eq!(text(library.logout()), "Successfully logged out.");
    assert_eq!(text(library.logout()), "No user is currently logged in.");
    assert!(library.current_user().is_none());
}

#[test]
fn failed_login_keeps_previous_session() {
    let mut library = library_with_users();
    library.login("Alice", "password1").unwrap();
    library.login("Bob", "nope").unwrap_err();
    assert_eq!(library.current_user().map(|s| s.name.as_str()), Some("Alice"));
}

#[test]
fn book_management_gating() {
    let mut library = library_with_users();
    assert_eq!(text(library.add_book(NAME, AUTHOR, 5)), "Please login first.");

    library.login("Bob", "password2").unwrap();
    assert_eq!(
        text(library.add_book(NAME, AUTHOR, 5)),
        "Permission denied. Admin role required."
    );

    library.login("Alice", "password1").unwrap();
    assert_eq!(
        text(library.add_book(NAME, AUTHOR, 5)),
        "Book \"Clean Code\" by Robert C. Martin added successfully, inventory: 5."
    );
    assert_eq!(
        text(library.add_book(NAME, AUTHOR, 3)),
        "Book \"Clean Code\" inventory successfully updated, new inventory: 8."
    );
    assert_eq!(
        text(library.borrow_book(NAME, AUTHOR)),
        "Permission denied. Only users can perform this action."
    );
    assert_eq!(
        text(library.return_book(NAME, AUTHOR)),
        "Permission denied. Only users can perform this action."
    );
}

#[test]
fn authorization_precedes_validation() {
    let mut library = library_with_users();
    library.login("Bob", "password2").unwrap();
    assert_eq!(
        text(library.add_book("", "", -1)),
        "Permission denied. Admin role required."
    );
}

#[test]
fn queries() {
    let mut library = stocked_library();
    assert_eq!(text(library.list_books()), "Please login first.");

    library.login("Bob", "password2").unwrap();
    assert_eq!(
        text(library.list_books()),
        "Book List:\nClean Code - Robert C. Martin - Inventory: 5"
    );
    assert_eq!(
        text(library.search_book(NAME, AUTHOR)),
        "Clean Code - Robert C. Martin - Inventory: 5"
    );
    assert_eq!(
        text(library.search_book("Non Existent", "Unknown Author")),
        "Book \"Non Existent\" by Unknown Author not found."
    );
}

#[test]
fn empty_catalog_listing() {
    let mut library = library_with_users();
    library.login("Bob", "password2").unwrap();
    assert_eq!(library.list_books(), Ok(Notice::EmptyCatalog));
    assert_eq!(text(library.list_books()), "No books in the library.");
}

#[test]
fn borrowing_and_returning() {
    let mut library = stocked_library();
    library.login("Bob", "password2").unwrap();

    assert_eq!(
        text(library.return_book(NAME, AUTHOR)),
        "You have not borrowed \"Clean Code\" by Robert C. Martin."
    );
    assert_eq!(
        text(library.borrow_book("Non Existent", "Unknown Author")),
        "Book \"Non Existent\" by Unknown Author not found."
    );
    assert_eq!(
        text(library.borrow_book(NAME, AUTHOR)),
        "Book \"Clean Code\" successfully borrowed."
    );
    assert_eq!(
        text(library.search_book(NAME, AUTHOR)),
        "Clean Code - Robert C. Martin - Inventory: 4"
    );
    assert_eq!(
        text(library.borrow_book(NAME, AUTHOR)),
        "You have already borrowed \"Clean Code\" by Robert C. Martin."
    );
    assert_eq!(
        text(library.return_book(NAME, AUTHOR)),
        "Book \"Clean Code\" successfully returned."
    );
    assert_eq!(
        text(library.search_book(NAME, AUTHOR)),
        "Clean Code - Robert C. Martin - Inventory: 5"
    );
}

#[test]
fn last_copy_goes_to_first_borrower() {
    let mut library = library_with_users();
    library.register("user", "Carol", "password3").unwrap();
    library.login("Alice", "password1").unwrap();
    library.add_book("Dune", "Frank Herbert", 1).unwrap();

    library.login("Bob", "password2").unwrap();
    library.borrow_book("Dune", "Frank Herbert").unwrap();
    library.login("Carol", "password3").unwrap();
    assert_eq!(
        text(library.borrow_book("Dune", "Frank Herbert")),
        "Book \"Dune\" is not available for borrowing."
    );
}

#[test]
fn deletion() {
    let mut library = stocked_library();
    library.login("Bob", "password2").unwrap();
    library.borrow_book(NAME, AUTHOR).unwrap();

    library.login("Alice", "password1").unwrap();
    assert_eq!(
        text(library.delete_book(NAME, AUTHOR)),
        "Cannot delete book \"Clean Code\" because it is currently borrowed."
    );
    assert_eq!(
        text(library.delete_book("Non Existent", "Unknown Author")),
        "Book \"Non Existent\" by Unknown Author not found."
    );

    library.login("Bob", "password2").unwrap();
    library.return_book(NAME, AUTHOR).unwrap();
    library.login("Alice", "password1").unwrap();
    assert_eq!(
        text(library.delete_book(NAME, AUTHOR)),
        "Book \"Clean Code\" by Robert C. Martin successfully deleted."
    );
    assert_eq!(text(library.list_books()), "No books in the library.");
}

#[test]
fn full_workflow() {
    let mut library = LibraryService::new();
    assert_eq!(
        text(library.register("admin", "Alice", "password1")),
        "Admin Alice successfully registered."
    );
    assert_eq!(
        text(library.register("user", "Bob", "password2")),
        "User Bob successfully registered."
    );

    assert_eq!(
        text(library.login("Alice", "password1")),
        "Admin Alice successfully logged in."
    );
    assert_eq!(
        text(library.add_book(NAME, AUTHOR, 5)),
        "Book \"Clean Code\" by Robert C. Martin added successfully, inventory: 5."
    );
    assert_eq!(
        text(library.list_books()),
        "Book List:\nClean Code - Robert C. Martin - Inventory: 5"
    );

    assert_eq!(
        text(library.login("Bob", "password2")),
        "User Bob successfully logged in."
    );
    assert_eq!(
        text(library.borrow_book(NAME, AUTHOR)),
        "Book \"Clean Code\" successfully borrowed."
    );

    library.login("Alice", "password1").unwrap();
    assert_eq!(
        text(library.delete_book(NAME, AUTHOR)),
        "Cannot delete book \"Clean Code\" because it is currently borrowed."
    );

    library.login("Bob", "password2").unwrap();
    assert_eq!(
        text(library.return_book(NAME, AUTHOR)),
        "Book \"Clean Code\" successfully returned."
    );

    library.login("Alice", "password1").unwrap();
    assert_eq!(
        text(library.add_book(NAME, AUTHOR, 3)),
        "Book \"Clean Code\" inventory successfully updated, new inventory: 8."
    );
}
