// Flyweight: share the intrinsic part of many cars, pass the extrinsic part
// in at call time.

use std::rc::Rc;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use crate::console::Console;
use crate::error::Result;

// =============================================================================
// State types
// =============================================================================

/// Intrinsic state, shared by every car of the same make.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CarAttributes {
    pub model: String,
    pub color: String,
    pub company: String,
}

impl CarAttributes {
    pub fn new(company: impl Into<String>, model: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            color: color.into(),
            company: company.into(),
        }
    }
}

/// Extrinsic state, unique to one registered car.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CarInstance {
    pub number: String,
    pub owner: String,
}

impl CarInstance {
    pub fn new(number: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            owner: owner.into(),
        }
    }
}

/// Factory lookup value: the shared attributes, optionally with the
/// per-car part when a caller wants a fully specific entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Car {
    #[serde(flatten)]
    pub attributes: CarAttributes,
    #[serde(flatten)]
    pub instance: Option<CarInstance>,
}

impl Car {
    pub fn shared(attributes: CarAttributes) -> Self {
        Self {
            attributes,
            instance: None,
        }
    }

    pub fn registered(attributes: CarAttributes, instance: CarInstance) -> Self {
        Self {
            attributes,
            instance: Some(instance),
        }
    }
}

// =============================================================================
// Flyweight
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct Flyweight {
    shared: CarAttributes,
}

impl Flyweight {
    pub fn new(shared: CarAttributes) -> Self {
        Self { shared }
    }

    pub fn shared(&self) -> &CarAttributes {
        &self.shared
    }

    pub fn operation(&self, unique: &CarInstance, console: &mut Console) -> Result<()> {
        let s = serde_json::to_string(&self.shared)?;
        let u = serde_json::to_string(unique)?;
        console.say(format!("Flyweight: Displaying shared {s} and unique {u} state."));
        Ok(())
    }
}

// =============================================================================
// Factory
// =============================================================================

/// Owns at most one flyweight per derived key, in insertion order.
#[derive(Debug, Default)]
pub struct FlyweightFactory {
    flyweights: Vec<(String, Rc<Flyweight>)>,
    index: FxHashMap<String, usize>,
}

impl FlyweightFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store. Cars that share a key collapse onto one entry.
    pub fn with_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        let mut factory = Self::new();
        for car in cars {
            let key = Self::get_key(&car);
            factory.insert(key, car.attributes);
        }
        factory
    }

    /// Sorted, underscore-joined attribute values. Number and owner only
    /// take part when the car carries both.
    pub fn get_key(car: &Car) -> String {
        let shared = &car.attributes;
        let mut elements = vec![
            shared.model.as_str(),
            shared.color.as_str(),
            shared.company.as_str(),
        ];
        if let Some(instance) = &car.instance {
            elements.push(instance.number.as_str());
            elements.push(instance.owner.as_str());
        }
        elements.into_iter().sorted().join("_")
    }

    pub fn get_flyweight(&mut self, car: &Car, console: &mut Console) -> Rc<Flyweight> {
        let key = Self::get_key(car);

        if let Some(&slot) = self.index.get(&key) {
            debug!(%key, "flyweight cache hit");
            console.say("FlyweightFactory: Reusing existing flyweight.");
            return Rc::clone(&self.flyweights[slot].1);
        }

        debug!(%key, "flyweight cache miss");
        console.say("FlyweightFactory: Can't find a flyweight, creating new one.");
        self.insert(key, car.attributes.clone())
    }

    pub fn list_flyweights(&self, console: &mut Console) {
        console.blank();
        console.say(format!("FlyweightsFactory: I have {} flyweights:", self.len()));
        for key in self.keys() {
            console.say(key);
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.flyweights.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.flyweights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flyweights.is_empty()
    }

    fn insert(&mut self, key: String, shared: CarAttributes) -> Rc<Flyweight> {
        if let Some(&slot) = self.index.get(&key) {
            return Rc::clone(&self.flyweights[slot].1);
        }
        let flyweight = Rc::new(Flyweight::new(shared));
        self.index.insert(key.clone(), self.flyweights.len());
        self.flyweights.push((key, Rc::clone(&flyweight)));
        flyweight
    }
}

// =============================================================================
// Client code
// =============================================================================

/// Register one car: the factory supplies the shared part, the caller keeps
/// the unique part and hands it to the flyweight.
pub fn add_car_to_police_database(
    factory: &mut FlyweightFactory,
    attributes: &CarAttributes,
    instance: &CarInstance,
    console: &mut Console,
) -> Result<Rc<Flyweight>> {
    console.blank();
    console.say("Client: Adding a car to database.");

    let flyweight = factory.get_flyweight(&Car::shared(attributes.clone()), console);
    flyweight.operation(instance, console)?;
    Ok(flyweight)
}

pub fn run_demo(console: &mut Console) -> Result<()> {
    let mut factory = FlyweightFactory::with_cars([
        Car::shared(CarAttributes::new("Chevrolet", "Camaro2018", "pink")),
        Car::shared(CarAttributes::new("Mercedes Benz", "C300", "black")),
        Car::shared(CarAttributes::new("Mercedes Benz", "C500", "red")),
        Car::shared(CarAttributes::new("BMW", "M5", "red")),
        Car::shared(CarAttributes::new("BMW", "X6", "white")),
    ]);
    factory.list_flyweights(console);

    let owner = CarInstance::new("CL234IR", "James Doe");
    add_car_to_police_database(&mut factory, &CarAttributes::new("BMW", "M5", "red"), &owner, console)?;
    add_car_to_police_database(&mut factory, &CarAttributes::new("BMW", "X1", "red"), &owner, console)?;

    factory.list_flyweights(console);
    Ok(())
}
