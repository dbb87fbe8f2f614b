use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::domain::fixtures::FixtureGenerator;

/// Digits a [`Decimal`] mantissa can hold. Larger requests are clamped,
/// integer digits first.
pub const MAX_DECIMAL_DIGITS: u32 = 28;

const FIRST_NAMES: &[&str] = &[
	"Amelia", "Benjamin", "Camila", "Daniel", "Elena", "Felipe", "Gabriela",
	"Hugo", "Isabel", "Joaquim", "Larissa", "Mateus", "Natalia", "Otavio",
	"Patricia", "Rafael", "Sofia", "Tiago", "Valentina", "Yuri",
];

const LAST_NAMES: &[&str] = &[
	"Almeida", "Barbosa", "Carvalho", "Dias", "Esteves", "Ferreira", "Gomes",
	"Henriques", "Lima", "Machado", "Nogueira", "Oliveira", "Pereira",
	"Queiroz", "Ribeiro", "Santos", "Teixeira", "Vieira",
];

const GENDER_NEUTRAL_NAMES: &[&str] = &[
	"Alex", "Ariel", "Avery", "Casey", "Charlie", "Dakota", "Emerson",
	"Finley", "Jordan", "Kai", "Morgan", "Quinn", "Reese", "Riley", "Rowan",
	"Sage", "Skyler", "Taylor",
];

/// [`FixtureGenerator`] backed by a seedable RNG. Every value, request ids
/// included, is drawn from the RNG so a seed reproduces a whole run.
pub struct RandomFixtures<R: Rng = StdRng> {
	rng:   R,
	today: Date,
}

impl RandomFixtures<StdRng> {
	pub fn from_entropy() -> Self {
		Self::new(StdRng::from_entropy(), OffsetDateTime::now_utc().date())
	}

	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed), OffsetDateTime::now_utc().date())
	}
}

impl<R: Rng> RandomFixtures<R> {
	pub fn new(rng: R, today: Date) -> Self {
		Self { rng, today }
	}

	fn pick(&mut self, names: &[&str]) -> String {
		names[self.rng.gen_range(0..names.len())].to_string()
	}
}

impl<R: Rng + Send> FixtureGenerator for RandomFixtures<R> {
	fn first_name(&mut self) -> String {
		self.pick(FIRST_NAMES)
	}

	fn last_name(&mut self) -> String {
		self.pick(LAST_NAMES)
	}

	fn terminal_alias(&mut self) -> String {
		self.pick(GENDER_NEUTRAL_NAMES)
	}

	fn birthday(&mut self, min_age: u8, max_age: u8) -> Date {
		let latest = years_before(self.today, min_age);
		let earliest = years_before(self.today, max_age.max(min_age));

		let day = self
			.rng
			.gen_range(earliest.to_julian_day()..=latest.to_julian_day());

		Date::from_julian_day(day).unwrap_or(latest)
	}

	fn decimal(&mut self, integer_digits: u32, fractional_digits: u32) -> Decimal {
		let integer_digits = integer_digits.min(MAX_DECIMAL_DIGITS);
		let fractional_digits =
			fractional_digits.min(MAX_DECIMAL_DIGITS - integer_digits);
		let total_digits = integer_digits + fractional_digits;

		// The leading integer digit and the last fractional digit are never
		// zero, so both the digit count and the scale always show.
		let mut mantissa: i128 = 0;
		for position in 0..total_digits {
			let leading = position == 0 && integer_digits > 0;
			let trailing = position == total_digits - 1 && fractional_digits > 0;
			let digit = if leading || trailing {
				self.rng.gen_range(1..10)
			} else {
				self.rng.gen_range(0..10)
			};
			mantissa = mantissa * 10 + digit;
		}

		Decimal::try_from_i128_with_scale(mantissa, fractional_digits)
			.unwrap_or(Decimal::ZERO)
	}

	fn request_id(&mut self) -> Uuid {
		uuid::Builder::from_random_bytes(self.rng.r#gen()).into_uuid()
	}
}

/// Same calendar day `years` years earlier. Feb 29 falls back to Feb 28.
fn years_before(date: Date, years: u8) -> Date {
	let year = date.year() - i32::from(years);

	date.replace_year(year)
		.or_else(|_| date.replace_day(28).and_then(|d| d.replace_year(year)))
		.unwrap_or(date)
}
