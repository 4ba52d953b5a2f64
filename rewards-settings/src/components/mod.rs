pub mod icons;
pub mod modal;
pub mod toggle;

pub use icons::WarningIcon;
pub use modal::ModalCloseButton;
pub use toggle::Toggle;
