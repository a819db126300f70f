//! Macros for reducing boilerplate in widget builders.

/// Generates a builder-style setter for a field.
///
/// ```ignore
/// builder_field!(font_size, f32);
/// // pub fn font_size(mut self, value: f32) -> Self { self.font_size = value; self }
///
/// builder_field!(row_height, row_height, f32);
/// ```
#[macro_export]
macro_rules! builder_field {
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
    ($method:ident, $field:ident, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$field = value;
            self
        }
    };
}

/// Generates a setter storing a closure in a `Callback` or `Callback0` field.
///
/// ```ignore
/// callback_setter!(on_open);          // Fn() -> M into Callback0<M>
/// callback_setter!(on_toggle, usize); // Fn(usize) -> M into Callback<usize, M>
/// ```
#[macro_export]
macro_rules! callback_setter {
    ($name:ident) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn() -> M + 'static,
        {
            self.$name = $crate::callback::Callback0::new(f);
            self
        }
    };
    ($name:ident, $param:ty) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn($param) -> M + 'static,
        {
            self.$name = $crate::callback::Callback::new(f);
            self
        }
    };
}
