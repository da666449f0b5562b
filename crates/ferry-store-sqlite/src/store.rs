//! [`SqliteStore`] — the SQLite implementation of [`DeliveryStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use ferry_core::{
  delivery::{Delivery, NewDelivery},
  lifecycle::Transition,
  store::{DeliveryStore, UserDeliveries},
};

use crate::{
  Error, Result,
  encode::{RawDelivery, decode_status, encode_date, encode_dt, encode_status, encode_uuid},
  schema::SCHEMA,
};

// ─── Row helpers ─────────────────────────────────────────────────────────────

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawDelivery> {
  Ok(RawDelivery {
    delivery_id: row.get(0)?,
    title:       row.get(1)?,
    from_place:  row.get(2)?,
    to_place:    row.get(3)?,
    date:        row.get(4)?,
    time:        row.get(5)?,
    category:    row.get(6)?,
    details:     row.get(7)?,
    status:      row.get(8)?,
    created_by:  row.get(9)?,
    taken_by:    row.get(10)?,
    created_at:  row.get(11)?,
  })
}

/// What a conditional transition update observed.
enum CasOutcome {
  /// The update matched; carries the row as written.
  Won(RawDelivery),
  /// No row with this id exists.
  Missing,
  /// The row exists but its status did not match the expected one.
  /// Carries the status actually found.
  Blocked(String),
  /// Status matched but the caller is not the accepting courier.
  WrongCourier,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Ferry delivery store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All writes
/// run serialized on that one connection, so a conditional `UPDATE` is an
/// atomic check-and-set: no reader can slip between the status check and the
/// write.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Map a transition outcome onto the domain result.
  fn resolve_cas(
    outcome: CasOutcome,
    id: Uuid,
    user_id: &str,
    action: Transition,
  ) -> Result<Delivery> {
    match outcome {
      CasOutcome::Won(raw) => raw.into_delivery(),
      CasOutcome::Missing => {
        Err(Error::Core(ferry_core::Error::NotFound(id)))
      }
      CasOutcome::Blocked(status) => {
        let status = decode_status(&status)?;
        Err(Error::Core(ferry_core::Error::InvalidTransition {
          id,
          status,
          action,
        }))
      }
      CasOutcome::WrongCourier => {
        Err(Error::Core(ferry_core::Error::NotCourier {
          id,
          user: user_id.to_owned(),
        }))
      }
    }
  }
}

// ─── DeliveryStore impl ──────────────────────────────────────────────────────

impl DeliveryStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewDelivery) -> Result<Delivery> {
    input.validate().map_err(Error::Core)?;
    let delivery = input.into_delivery();

    let id_str     = encode_uuid(delivery.id);
    let title      = delivery.title.clone();
    let from_place = delivery.from.clone();
    let to_place   = delivery.to.clone();
    let date_str   = encode_date(delivery.date);
    let time       = delivery.time.clone();
    let category   = delivery.category.clone();
    let details    = delivery.details.clone();
    let status_str = encode_status(delivery.status);
    let created_by = delivery.created_by.clone();
    let at_str     = encode_dt(delivery.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO deliveries (
             delivery_id, title, from_place, to_place, date, time,
             category, details, status, created_by, taken_by, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, NULL, ?11)",
          rusqlite::params![
            id_str, title, from_place, to_place, date_str, time,
            category, details, status_str, created_by, at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(delivery)
  }

  async fn get(&self, id: Uuid) -> Result<Option<Delivery>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawDelivery> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT delivery_id, title, from_place, to_place, date, time,
                      category, details, status, created_by, taken_by, created_at
               FROM deliveries WHERE delivery_id = ?1",
              rusqlite::params![id_str],
              read_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawDelivery::into_delivery).transpose()
  }

  async fn list(&self) -> Result<Vec<Delivery>> {
    let raws: Vec<RawDelivery> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT delivery_id, title, from_place, to_place, date, time,
                  category, details, status, created_by, taken_by, created_at
           FROM deliveries ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map([], read_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawDelivery::into_delivery).collect()
  }

  async fn list_by_user(&self, user_id: &str) -> Result<UserDeliveries> {
    let user = user_id.to_owned();

    let (created_raw, taken_raw): (Vec<RawDelivery>, Vec<RawDelivery>) = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT delivery_id, title, from_place, to_place, date, time,
                  category, details, status, created_by, taken_by, created_at
           FROM deliveries WHERE created_by = ?1 ORDER BY rowid",
        )?;
        let created = stmt
          .query_map(rusqlite::params![user], read_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare(
          "SELECT delivery_id, title, from_place, to_place, date, time,
                  category, details, status, created_by, taken_by, created_at
           FROM deliveries WHERE taken_by = ?1 ORDER BY rowid",
        )?;
        let taken = stmt
          .query_map(rusqlite::params![user], read_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((created, taken))
      })
      .await?;

    Ok(UserDeliveries {
      created: created_raw
        .into_iter()
        .map(RawDelivery::into_delivery)
        .collect::<Result<_>>()?,
      taken:   taken_raw
        .into_iter()
        .map(RawDelivery::into_delivery)
        .collect::<Result<_>>()?,
    })
  }

  async fn accept(&self, id: Uuid, user_id: &str) -> Result<Delivery> {
    let id_str = encode_uuid(id);
    let user   = user_id.to_owned();

    let outcome: CasOutcome = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE deliveries SET status = 'in-progress', taken_by = ?2
           WHERE delivery_id = ?1 AND status = 'open'",
          rusqlite::params![id_str, user],
        )?;

        if changed == 0 {
          let found: Option<String> = conn
            .query_row(
              "SELECT status FROM deliveries WHERE delivery_id = ?1",
              rusqlite::params![id_str],
              |r| r.get(0),
            )
            .optional()?;
          return Ok(match found {
            None => CasOutcome::Missing,
            Some(status) => CasOutcome::Blocked(status),
          });
        }

        let raw = conn.query_row(
          "SELECT delivery_id, title, from_place, to_place, date, time,
                  category, details, status, created_by, taken_by, created_at
           FROM deliveries WHERE delivery_id = ?1",
          rusqlite::params![id_str],
          read_row,
        )?;
        Ok(CasOutcome::Won(raw))
      })
      .await?;

    Self::resolve_cas(outcome, id, user_id, Transition::Accept)
  }

  async fn complete(&self, id: Uuid, user_id: &str) -> Result<Delivery> {
    let id_str = encode_uuid(id);
    let user   = user_id.to_owned();

    let outcome: CasOutcome = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE deliveries SET status = 'done'
           WHERE delivery_id = ?1 AND status = 'in-progress' AND taken_by = ?2",
          rusqlite::params![id_str, user],
        )?;

        if changed == 0 {
          let found: Option<(String, Option<String>)> = conn
            .query_row(
              "SELECT status, taken_by FROM deliveries WHERE delivery_id = ?1",
              rusqlite::params![id_str],
              |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .optional()?;
          return Ok(match found {
            None => CasOutcome::Missing,
            Some((status, _)) if status != "in-progress" => {
              CasOutcome::Blocked(status)
            }
            Some(_) => CasOutcome::WrongCourier,
          });
        }

        let raw = conn.query_row(
          "SELECT delivery_id, title, from_place, to_place, date, time,
                  category, details, status, created_by, taken_by, created_at
           FROM deliveries WHERE delivery_id = ?1",
          rusqlite::params![id_str],
          read_row,
        )?;
        Ok(CasOutcome::Won(raw))
      })
      .await?;

    Self::resolve_cas(outcome, id, user_id, Transition::Complete)
  }
}
