use std::rc::Rc;

use tutor_shared::{BookingRecord, FetchError};

use crate::api::TutorApi;

/// Read-only booking history, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryLoader {
    bookings: Rc<[BookingRecord]>,
}

impl HistoryLoader {
    pub async fn load<A: TutorApi + ?Sized>(api: &A) -> Result<Vec<BookingRecord>, FetchError> {
        let rows = api.fetch_bookings().await?;
        Ok(rows.into_iter().map(BookingRecord::from).collect())
    }

    /// Swaps in a freshly fetched list; never merges.
    pub fn replace(&self, bookings: Vec<BookingRecord>) -> Self {
        Self { bookings: bookings.into() }
    }

    pub fn bookings(&self) -> &[BookingRecord] {
        &self.bookings
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
