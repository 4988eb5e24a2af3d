//! Domain types for trip planning
//!
//! Request, option, itinerary and result records shared by every stage of the
//! pipeline. All of them serialize with serde for the caller's transport.

mod itinerary;
mod money;
mod options;
mod request;
mod result;

pub use itinerary::{Category, Dining, ItineraryDay, TimeOfDay, TimeSlot};
pub use money::{Currency, Money, Price};
pub use options::{
    Availability, CabinClass, CancellationPolicy, Domain, DomainOptions, FlightOption, HotelOption, OperatorKind,
    RoadMode, RoadOption, SeatStatus, Sentinel, SentinelMarker, TrainOption,
};
pub use request::{BudgetTier, RawRequest, TripRequest};
pub use result::{ChatResponse, CompiledResult, PlanResponse, Step};
