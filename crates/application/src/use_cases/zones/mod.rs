mod resolve_zone;

pub use resolve_zone::ResolveZoneUseCase;
