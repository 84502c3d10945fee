//! Demonstration inventory written by `init_ledger`

use showroom_core::Car;

/// A car that `init_ledger` creates when missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCar {
    /// Ledger key
    pub id: &'static str,
    /// Manufacturer
    pub make: &'static str,
    /// Model name
    pub model: &'static str,
    /// Color
    pub color: &'static str,
    /// Model year
    pub year: i32,
    /// Initial owner
    pub owner: &'static str,
}

impl SampleCar {
    /// Build the record
    pub fn to_car(&self) -> Car {
        Car::new(self.id, self.make, self.model, self.color, self.year, self.owner)
    }
}

/// Seed inventory, in creation order
pub const SAMPLE_CARS: [SampleCar; 5] = [
    SampleCar {
        id: "CAR001",
        make: "Toyota",
        model: "Corolla",
        color: "Blue",
        year: 2020,
        owner: "John",
    },
    SampleCar {
        id: "CAR002",
        make: "Honda",
        model: "Civic",
        color: "Red",
        year: 2021,
        owner: "Sarah",
    },
    SampleCar {
        id: "CAR003",
        make: "Ford",
        model: "Mustang",
        color: "Black",
        year: 2019,
        owner: "Mike",
    },
    SampleCar {
        id: "CAR004",
        make: "BMW",
        model: "X5",
        color: "White",
        year: 2022,
        owner: "Lisa",
    },
    SampleCar {
        id: "CAR005",
        make: "Tesla",
        model: "Model 3",
        color: "Silver",
        year: 2021,
        owner: "David",
    },
];
