//! Currency picker state.

use converter_types::CurrencyCode;

/// Selected currency plus whether its picker is showing.
///
/// The screen holds two independent instances, one for the source and one for
/// the target currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySelector {
    selected: CurrencyCode,
    open: bool,
}

impl CurrencySelector {
    pub fn new(initial: CurrencyCode) -> Self {
        Self {
            selected: initial,
            open: false,
        }
    }

    pub fn selected(&self) -> CurrencyCode {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Currencies the picker offers, in display order.
    pub fn options(&self) -> &'static [CurrencyCode] {
        CurrencyCode::all()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Selects the currency whose code is exactly `code` and closes the picker.
    ///
    /// Codes outside the offered set leave the selector untouched and return `false`.
    pub fn choose(&mut self, code: &str) -> bool {
        match self.options().iter().find(|c| c.code() == code) {
            Some(&currency) => {
                self.choose_code(currency);
                true
            }
            None => false,
        }
    }

    pub fn choose_code(&mut self, code: CurrencyCode) {
        self.selected = code;
        self.close();
    }
}
