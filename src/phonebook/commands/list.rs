use crate::commands::CmdResult;
use crate::error::Result;
use crate::phonebook::Phonebook;

pub fn run(book: &Phonebook) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_contacts(book.list_all().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::seed_contacts;

    #[test]
    fn lists_in_insertion_order() {
        let mut book = Phonebook::from(seed_contacts());
        add::run(&mut book, "Zed", "0", "0").unwrap();

        let result = run(&book).unwrap();
        let names: Vec<_> = result.listed_contacts.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Alan", "Alex", "Alice", "Adelina", "Zed"]);
        assert!(!result.is_mutation());
    }

    #[test]
    fn empty_book_lists_nothing() {
        let result = run(&Phonebook::new()).unwrap();
        assert!(result.listed_contacts.is_empty());
    }
}
