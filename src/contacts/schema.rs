//! Sea-query schema definition for the contacts table.

use sea_query::Iden;

/// Contacts table schema.
///
/// `phone_number` is indexed but deliberately not unique; it is the
/// current external identifier of a record, not a stable primary key.
#[derive(Iden)]
pub enum Contacts {
    Table,
    #[iden = "id"]
    Id,
    #[iden = "first_name"]
    FirstName,
    #[iden = "last_name"]
    LastName,
    #[iden = "phone_number"]
    PhoneNumber,
    #[iden = "address"]
    Address,
}
