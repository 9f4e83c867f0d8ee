/// The four slots a booking needs. Rebuilt from the model reply each turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSlots {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub travel_class: Option<String>,
}

impl BookingSlots {
    pub fn is_complete(&self) -> bool {
        [
            &self.origin,
            &self.destination,
            &self.date,
            &self.travel_class,
        ]
        .iter()
        .all(|slot| slot.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }

    /// Names of the slots still empty, in prompt order.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for (name, slot) in [
            ("origin", &self.origin),
            ("dest", &self.destination),
            ("date", &self.date),
            ("class", &self.travel_class),
        ] {
            if slot.as_deref().map_or(true, |v| v.trim().is_empty()) {
                missing.push(name);
            }
        }
        missing
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingStatus {
    Pending,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(BookingStatus::Pending),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub date: String,
    pub phone: String,
    pub origin: String,
    pub destination: String,
    pub travel_class: String,
    pub status: BookingStatus,
}

impl BookingRecord {
    /// Only a fully filled slot set becomes a record.
    pub fn from_slots(phone: &str, slots: BookingSlots) -> Option<Self> {
        if !slots.is_complete() {
            return None;
        }
        Some(Self {
            date: slots.date?,
            phone: phone.to_string(),
            origin: slots.origin?,
            destination: slots.destination?,
            travel_class: slots.travel_class?,
            status: BookingStatus::Pending,
        })
    }

    /// Column order of the bookings sheet.
    pub fn row(&self) -> [&str; 6] {
        [
            self.date.as_str(),
            self.phone.as_str(),
            self.origin.as_str(),
            self.destination.as_str(),
            self.travel_class.as_str(),
            self.status.as_str(),
        ]
    }
}
