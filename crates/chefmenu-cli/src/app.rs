use chefmenu_core::{
    filter_by_course, Course, CourseFilter, DishForm, IdGenerator, MenuItem, MenuStore,
    NavigationStack, PaymentForm, Price, Screen, SharedMenuStore, ADD_ON_OPTIONS,
};
use tracing::{debug, info};

use crate::settings::Settings;

/// Focusable rows on the Chef screen, in Tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChefField {
    Name,
    Price,
    Course,
    AddOn,
    Submit,
    Dishes,
}

impl ChefField {
    const ORDER: [ChefField; 6] = [
        ChefField::Name,
        ChefField::Price,
        ChefField::Course,
        ChefField::AddOn,
        ChefField::Submit,
        ChefField::Dishes,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }

    pub fn is_text(self) -> bool {
        matches!(self, ChefField::Name | ChefField::Price)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentField {
    BankName,
    AccountNumber,
    Pay,
}

impl PaymentField {
    const ORDER: [PaymentField; 3] = [PaymentField::BankName, PaymentField::AccountNumber, PaymentField::Pay];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }

    pub fn is_text(self) -> bool {
        !matches!(self, PaymentField::Pay)
    }
}

fn cycle<T: Copy + PartialEq>(order: &[T], current: T, step: usize) -> T {
    let index = order.iter().position(|f| *f == current).unwrap_or(0);
    order[(index + step) % order.len()]
}

/// What a picker choice is written into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerTarget {
    Course,
    AddOn,
    Filter,
}

/// Modal single-choice picker
#[derive(Clone, Debug, PartialEq)]
pub struct Picker {
    pub target: PickerTarget,
    pub label: &'static str,
    pub options: Vec<&'static str>,
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    Picker(Picker),
    ConfirmRemove { id: String, name: String },
    Message { text: String, is_error: bool },
}

/// Application state
pub struct App {
    pub title: String,
    pub currency: String,
    pub should_quit: bool,

    pub nav: NavigationStack,
    pub store: SharedMenuStore,
    ids: Box<dyn IdGenerator>,

    pub overlay: Option<Overlay>,
    pub status: Option<String>,

    // Home
    pub home_index: usize,

    // Chef
    pub dish_form: DishForm,
    pub chef_field: ChefField,
    pub chef_index: usize,

    // Guest filter
    pub filter: CourseFilter,
    pub guest_index: usize,

    // Payment
    pub payment_form: PaymentForm,
    pub payment_field: PaymentField,
}

impl App {
    pub fn new(store: SharedMenuStore, ids: Box<dyn IdGenerator>) -> Self {
        let defaults = Settings::default();
        Self {
            title: defaults.app.name,
            currency: defaults.app.currency,
            should_quit: false,
            nav: NavigationStack::new(),
            store,
            ids,
            overlay: None,
            status: None,
            home_index: 0,
            dish_form: DishForm::default(),
            chef_field: ChefField::Name,
            chef_index: 0,
            filter: CourseFilter::All,
            guest_index: 0,
            payment_form: PaymentForm::default(),
            payment_field: PaymentField::BankName,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let store = if settings.menu.seed_demo_items {
            MenuStore::seeded()
        } else {
            MenuStore::new()
        };
        let ids = settings.id_strategy().build(store.list());

        let mut app = Self::new(SharedMenuStore::new(store), ids);
        app.title = settings.app.name.clone();
        app.currency = settings.app.currency.clone();
        app
    }

    pub fn format_price(&self, price: Price) -> String {
        format!("{} {}", self.currency, price)
    }

    // ===== READS =====

    pub fn items(&self) -> Vec<MenuItem> {
        self.store.snapshot()
    }

    pub fn guest_items(&self) -> Vec<MenuItem> {
        let items = self.items();
        filter_by_course(&items, self.filter).into_owned()
    }

    pub fn selected_home_item(&self) -> Option<MenuItem> {
        self.items().into_iter().nth(self.home_index)
    }

    pub fn selected_chef_item(&self) -> Option<MenuItem> {
        self.items().into_iter().nth(self.chef_index)
    }

    pub fn selected_guest_item(&self) -> Option<MenuItem> {
        self.guest_items().into_iter().nth(self.guest_index)
    }

    // ===== NAVIGATION =====

    /// Push `screen`, resetting that screen's private state where it has any
    pub fn open(&mut self, screen: Screen) {
        match &screen {
            Screen::Chef => {
                self.chef_field = ChefField::Name;
                self.chef_index = 0;
            }
            Screen::GuestFilter => {
                self.filter = CourseFilter::All;
                self.guest_index = 0;
            }
            Screen::Payment { .. } => {
                self.payment_form.reset();
                self.payment_field = PaymentField::BankName;
            }
            _ => {}
        }
        self.status = None;
        self.nav.navigate(screen);
    }

    /// String-routed navigation; may land on a placeholder screen
    pub fn open_route(&mut self, name: &str, item: Option<MenuItem>) {
        self.status = None;
        self.nav.navigate_route(name, item);
    }

    pub fn open_selected(&mut self, item: Option<MenuItem>) {
        if let Some(item) = item {
            self.open(Screen::SelectedCourse { item });
        }
    }

    pub fn go_back(&mut self) {
        self.nav.go_back();
        self.clamp_indexes();
    }

    pub fn go_home(&mut self) {
        self.nav.pop_to_top();
        self.clamp_indexes();
    }

    // ===== LISTS =====

    pub fn move_selection(&mut self, down: bool) {
        let len = match self.nav.current() {
            Screen::Home | Screen::Chef => self.store.len(),
            Screen::GuestFilter => self.guest_items().len(),
            _ => return,
        };
        let index = match self.nav.current() {
            Screen::Home => &mut self.home_index,
            Screen::Chef => &mut self.chef_index,
            _ => &mut self.guest_index,
        };
        if down {
            if *index + 1 < len {
                *index += 1;
            }
        } else {
            *index = index.saturating_sub(1);
        }
    }

    fn clamp_indexes(&mut self) {
        let len = self.store.len();
        let guest_len = self.guest_items().len();
        self.home_index = self.home_index.min(len.saturating_sub(1));
        self.chef_index = self.chef_index.min(len.saturating_sub(1));
        self.guest_index = self.guest_index.min(guest_len.saturating_sub(1));
    }

    // ===== PICKER =====

    pub fn open_picker(&mut self, target: PickerTarget) {
        let (label, options, current) = match target {
            PickerTarget::Course => ("Course", Course::options(), self.dish_form.course.label()),
            PickerTarget::AddOn => ("Add-on", ADD_ON_OPTIONS.to_vec(), self.dish_form.add_on.as_str()),
            PickerTarget::Filter => ("Filter by course", CourseFilter::options(), self.filter.label()),
        };
        let index = options.iter().position(|o| *o == current).unwrap_or(0);
        self.overlay = Some(Overlay::Picker(Picker {
            target,
            label,
            options,
            index,
        }));
    }

    pub fn picker_move(&mut self, down: bool) {
        if let Some(Overlay::Picker(picker)) = &mut self.overlay {
            if down {
                picker.index = (picker.index + 1).min(picker.options.len().saturating_sub(1));
            } else {
                picker.index = picker.index.saturating_sub(1);
            }
        }
    }

    /// Apply the highlighted option and close the picker
    pub fn picker_choose(&mut self) {
        let Some(Overlay::Picker(picker)) = self.overlay.take() else {
            return;
        };
        let Some(choice) = picker.options.get(picker.index).copied() else {
            return;
        };
        debug!(picker = ?picker.target, choice, "Picker choice");

        match picker.target {
            PickerTarget::Course => {
                if let Some(course) = Course::from_label(choice) {
                    self.dish_form.course = course;
                }
            }
            PickerTarget::AddOn => self.dish_form.add_on = choice.to_string(),
            PickerTarget::Filter => {
                if let Some(filter) = CourseFilter::from_label(choice) {
                    self.filter = filter;
                    self.guest_index = 0;
                }
            }
        }
    }

    // ===== TEXT INPUT =====

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.nav.current() {
            Screen::Chef => match self.chef_field {
                ChefField::Name => Some(&mut self.dish_form.name),
                ChefField::Price => Some(&mut self.dish_form.price),
                _ => None,
            },
            Screen::Payment { .. } => match self.payment_field {
                PaymentField::BankName => Some(&mut self.payment_form.bank_name),
                PaymentField::AccountNumber => Some(&mut self.payment_form.account_number),
                PaymentField::Pay => None,
            },
            _ => None,
        }
    }

    pub fn is_editing_text(&self) -> bool {
        match self.nav.current() {
            Screen::Chef => self.chef_field.is_text(),
            Screen::Payment { .. } => self.payment_field.is_text(),
            _ => false,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_text() {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text() {
            field.pop();
        }
    }

    // ===== CHEF ACTIONS =====

    pub fn submit_dish(&mut self) {
        match self.dish_form.submit(self.ids.as_ref(), &self.store, &mut self.nav) {
            Ok(item) => {
                self.chef_field = ChefField::Name;
                self.home_index = 0;
                self.clamp_indexes();
                self.status = Some(format!("Added {} ({})", item.name, self.format_price(item.price)));
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    pub fn request_remove(&mut self) {
        if let Some(item) = self.selected_chef_item() {
            self.overlay = Some(Overlay::ConfirmRemove {
                id: item.id,
                name: item.name,
            });
        }
    }

    /// Confirm action of the remove dialog
    pub fn confirm_remove(&mut self) {
        let Some(Overlay::ConfirmRemove { id, name }) = self.overlay.take() else {
            return;
        };
        if self.store.remove_item(&id).is_some() {
            self.status = Some(format!("Removed {}", name));
        }
        self.clamp_indexes();
    }

    /// Cancel action of the remove dialog
    pub fn cancel_remove(&mut self) {
        if matches!(self.overlay, Some(Overlay::ConfirmRemove { .. })) {
            self.overlay = None;
        }
    }

    // ===== PAYMENT =====

    pub fn submit_payment(&mut self) {
        let Screen::Payment { item } = self.nav.current().clone() else {
            return;
        };
        match self.payment_form.submit(&item) {
            Ok(receipt) => {
                let text = format!(
                    "Paid {} for {} from {} {}. Ref {}",
                    self.format_price(receipt.amount),
                    receipt.dish,
                    receipt.bank_name,
                    receipt.masked_account,
                    receipt.reference
                );
                info!(reference = %receipt.reference, "Order paid");
                self.payment_field = PaymentField::BankName;
                self.go_home();
                self.overlay = Some(Overlay::Message {
                    text,
                    is_error: false,
                });
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    // ===== OVERLAYS =====

    pub fn show_error(&mut self, text: String) {
        self.overlay = Some(Overlay::Message { text, is_error: true });
    }

    pub fn dismiss_message(&mut self) {
        if matches!(self.overlay, Some(Overlay::Message { .. })) {
            self.overlay = None;
        }
    }
}

/// Seeded app with sequential ids, for tests across the crate
#[cfg(test)]
pub(crate) fn test_app() -> App {
    let store = MenuStore::seeded();
    let ids = Box::new(chefmenu_core::SequentialIdGenerator::after(store.list()));
    App::new(SharedMenuStore::new(store), ids)
}
