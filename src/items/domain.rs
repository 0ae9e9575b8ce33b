use crate::core::domain::Identifiable;
use crate::core::library::ItemKind;

pub mod model;

pub trait Lendable: Identifiable {
    fn is_lent(&self) -> bool;
    fn kind(&self) -> ItemKind;
}
