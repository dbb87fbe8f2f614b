use rust_decimal::Decimal;
use time::Date;
use uuid::Uuid;

/// Source of the random payloads posted during a run.
pub trait FixtureGenerator: Send {
	fn first_name(&mut self) -> String;
	fn last_name(&mut self) -> String;
	fn terminal_alias(&mut self) -> String;
	/// A birthday for someone aged between `min_age` and `max_age` today.
	fn birthday(&mut self, min_age: u8, max_age: u8) -> Date;
	/// A positive decimal with exactly the given number of integer and
	/// fractional digits. Implementations may clamp counts their decimal
	/// type cannot represent.
	fn decimal(&mut self, integer_digits: u32, fractional_digits: u32) -> Decimal;
	fn request_id(&mut self) -> Uuid;
}
