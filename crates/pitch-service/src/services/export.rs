//! CSV export of every table for admins
//!
//! Each export is a fixed header record followed by one record per row.
//! Dates render as `YYYY-MM-DD`, timestamps as `YYYY-MM-DD HH:MM:SS` in UTC.

use chrono::{DateTime, NaiveDate, Utc};
use pitch_core::entities::User;
use pitch_core::Snowflake;
use tracing::{debug, instrument};

use crate::dto::Related;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub const USERS_HEADER: &[&str] = &[
    "E-mail", "First Name", "Last Name", "Phone Number", "Location", "Role", "Creation Date",
];

pub const PLAYER_ADVERTISEMENTS_HEADER: &[&str] = &[
    "E-mail", "First Name", "Last Name", "Position", "League", "Region", "Age", "Height", "Foot",
    "Min Salary", "Max Salary", "Creation Date", "End Date",
];

pub const CLUB_ADVERTISEMENTS_HEADER: &[&str] = &[
    "E-mail", "First Name", "Last Name", "Position", "Club Name", "League", "Region",
    "Min Salary", "Max Salary", "Creation Date", "End Date",
];

pub const CLUB_OFFERS_HEADER: &[&str] = &[
    "Offer Status", "E-mail", "First Name", "Last Name", "Position", "Club Name", "League",
    "Region", "Salary", "Additional Information", "Creation Date",
];

pub const PLAYER_OFFERS_HEADER: &[&str] = &[
    "Offer Status", "E-mail", "First Name", "Last Name", "Position", "Age", "Height", "Foot",
    "Salary", "Additional Information", "Creation Date",
];

pub const CLUB_HISTORY_HEADER: &[&str] = &[
    "E-mail", "First Name", "Last Name", "Position", "Club Name", "League", "Region",
    "Start Date", "End Date", "Number Of Matches", "Goals", "Assists", "Additional Achievements",
];

pub const CHATS_HEADER: &[&str] = &[
    "E-mail 1", "First Name 1", "Last Name 1", "E-mail 2", "First Name 2", "Last Name 2",
];

pub const MESSAGES_HEADER: &[&str] = &[
    "Sender E-mail", "Sender First Name", "Sender Last Name", "Receiver E-mail",
    "Receiver First Name", "Receiver Last Name", "Content", "Timestamp",
];

pub const PROBLEMS_HEADER: &[&str] = &[
    "Is Solved", "Requester E-mail", "Requester First Name", "Requester Last Name", "Title",
    "Description", "Creation Date",
];

/// A rendered CSV document
#[derive(Debug, Clone)]
pub struct CsvExport {
    /// Download name, `<entity>.csv`
    pub filename: &'static str,
    pub body: Vec<u8>,
}

/// Write the header and rows as CSV
pub fn render<I>(header: &[&str], rows: I) -> ServiceResult<Vec<u8>>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    writer
        .into_inner()
        .map_err(|e| ServiceError::internal(format!("CSV flush failed: {e}")))
}

fn date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

fn day(value: DateTime<Utc>) -> String {
    date(value.date_naive())
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// E-mail, first name and last name of a user
fn identity(user: &User) -> [String; 3] {
    [
        user.email.clone(),
        user.first_name.clone(),
        user.last_name.clone(),
    ]
}

pub struct ExportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExportService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn related<I>(&self, user_ids: I) -> ServiceResult<Related>
    where
        I: IntoIterator<Item = Snowflake>,
    {
        self.ctx.related(user_ids).await
    }

    #[instrument(skip(self))]
    pub async fn users(&self) -> ServiceResult<CsvExport> {
        let users = self.ctx.user_repo().find_all().await?;
        let rows = users.iter().map(|user| {
            let mut row = identity(user).to_vec();
            row.extend([
                user.phone_number.clone(),
                user.location.clone(),
                user.roles.to_string(),
                day(user.created_at),
            ]);
            row
        });

        debug!(rows = users.len(), "Exporting users");
        Ok(CsvExport {
            filename: "users.csv",
            body: render(USERS_HEADER, rows)?,
        })
    }

    #[instrument(skip(self))]
    pub async fn player_advertisements(&self) -> ServiceResult<CsvExport> {
        let ads = self.ctx.player_advertisement_repo().find_all().await?;
        let related = self.related(ads.iter().map(|ad| ad.player_id)).await?;

        let mut rows = Vec::with_capacity(ads.len());
        for ad in &ads {
            let mut row = identity(related.user(ad.player_id)?).to_vec();
            row.extend([
                related.position(ad.player_position_id)?.position_name,
                ad.league.clone(),
                ad.region.clone(),
                ad.age.to_string(),
                ad.height.to_string(),
                related.foot(ad.player_foot_id)?.name,
                ad.salary_range.min.to_string(),
                ad.salary_range.max.to_string(),
                day(ad.creation_date),
                day(ad.end_date),
            ]);
            rows.push(row);
        }

        Ok(CsvExport {
            filename: "player-advertisements.csv",
            body: render(PLAYER_ADVERTISEMENTS_HEADER, rows)?,
        })
    }

    #[instrument(skip(self))]
    pub async fn club_advertisements(&self) -> ServiceResult<CsvExport> {
        let ads = self.ctx.club_advertisement_repo().find_all().await?;
        let related = self.related(ads.iter().map(|ad| ad.club_member_id)).await?;

        let mut rows = Vec::with_capacity(ads.len());
        for ad in &ads {
            let mut row = identity(related.user(ad.club_member_id)?).to_vec();
            row.extend([
                related.position(ad.player_position_id)?.position_name,
                ad.club_name.clone(),
                ad.league.clone(),
                ad.region.clone(),
                ad.salary_range.min.to_string(),
                ad.salary_range.max.to_string(),
                day(ad.creation_date),
                day(ad.end_date),
            ]);
            rows.push(row);
        }

        Ok(CsvExport {
            filename: "club-advertisements.csv",
            body: render(CLUB_ADVERTISEMENTS_HEADER, rows)?,
        })
    }

    #[instrument(skip(self))]
    pub async fn club_offers(&self) -> ServiceResult<CsvExport> {
        let offers = self.ctx.club_offer_repo().find_all().await?;
        let related = self.related(offers.iter().map(|o| o.club_member_id)).await?;

        let mut rows = Vec::with_capacity(offers.len());
        for offer in &offers {
            let mut row = vec![offer.status.to_string()];
            row.extend(identity(related.user(offer.club_member_id)?));
            row.extend([
                related.position(offer.player_position_id)?.position_name,
                offer.club_name.clone(),
                offer.league.clone(),
                offer.region.clone(),
                offer.salary.to_string(),
                offer.additional_information.clone().unwrap_or_default(),
                day(offer.creation_date),
            ]);
            rows.push(row);
        }

        Ok(CsvExport {
            filename: "club-offers.csv",
            body: render(CLUB_OFFERS_HEADER, rows)?,
        })
    }

    #[instrument(skip(self))]
    pub async fn player_offers(&self) -> ServiceResult<CsvExport> {
        let offers = self.ctx.player_offer_repo().find_all().await?;
        let related = self.related(offers.iter().map(|o| o.player_id)).await?;

        let mut rows = Vec::with_capacity(offers.len());
        for offer in &offers {
            let mut row = vec![offer.status.to_string()];
            row.extend(identity(related.user(offer.player_id)?));
            row.extend([
                related.position(offer.player_position_id)?.position_name,
                offer.age.to_string(),
                offer.height.to_string(),
                related.foot(offer.player_foot_id)?.name,
                offer.salary.to_string(),
                offer.additional_information.clone().unwrap_or_default(),
                day(offer.creation_date),
            ]);
            rows.push(row);
        }

        Ok(CsvExport {
            filename: "player-offers.csv",
            body: render(PLAYER_OFFERS_HEADER, rows)?,
        })
    }

    #[instrument(skip(self))]
    pub async fn club_history(&self) -> ServiceResult<CsvExport> {
        let histories = self.ctx.club_history_repo().find_all().await?;
        let related = self.related(histories.iter().map(|h| h.player_id)).await?;

        let mut rows = Vec::with_capacity(histories.len());
        for history in &histories {
            let achievements = &history.achievements;
            let mut row = identity(related.user(history.player_id)?).to_vec();
            row.extend([
                related.position(history.player_position_id)?.position_name,
                history.club_name.clone(),
                history.league.clone(),
                history.region.clone(),
                date(history.start_date),
                date(history.end_date),
                achievements.number_of_matches.to_string(),
                achievements.goals.to_string(),
                achievements.assists.to_string(),
                achievements.additional_achievements.clone().unwrap_or_default(),
            ]);
            rows.push(row);
        }

        Ok(CsvExport {
            filename: "club-history.csv",
            body: render(CLUB_HISTORY_HEADER, rows)?,
        })
    }

    #[instrument(skip(self))]
    pub async fn chats(&self) -> ServiceResult<CsvExport> {
        let chats = self.ctx.chat_repo().find_all().await?;
        let related = self
            .related(chats.iter().flat_map(|c| [c.user1_id, c.user2_id]))
            .await?;

        let mut rows = Vec::with_capacity(chats.len());
        for chat in &chats {
            let mut row = identity(related.user(chat.user1_id)?).to_vec();
            row.extend(identity(related.user(chat.user2_id)?));
            rows.push(row);
        }

        Ok(CsvExport {
            filename: "chats.csv",
            body: render(CHATS_HEADER, rows)?,
        })
    }

    #[instrument(skip(self))]
    pub async fn messages(&self) -> ServiceResult<CsvExport> {
        let messages = self.ctx.message_repo().find_all().await?;
        let related = self
            .related(messages.iter().flat_map(|m| [m.sender_id, m.receiver_id]))
            .await?;

        let mut rows = Vec::with_capacity(messages.len());
        for message in &messages {
            let mut row = identity(related.user(message.sender_id)?).to_vec();
            row.extend(identity(related.user(message.receiver_id)?));
            row.extend([message.content.clone(), timestamp(message.timestamp)]);
            rows.push(row);
        }

        Ok(CsvExport {
            filename: "messages.csv",
            body: render(MESSAGES_HEADER, rows)?,
        })
    }

    #[instrument(skip(self))]
    pub async fn problems(&self) -> ServiceResult<CsvExport> {
        let problems = self.ctx.problem_repo().find_all().await?;
        let related = self.related(problems.iter().map(|p| p.requester_id)).await?;

        let mut rows = Vec::with_capacity(problems.len());
        for problem in &problems {
            let mut row = vec![problem.is_solved.to_string()];
            row.extend(identity(related.user(problem.requester_id)?));
            row.extend([
                problem.title.clone(),
                problem.description.clone(),
                day(problem.creation_date),
            ]);
            rows.push(row);
        }

        Ok(CsvExport {
            filename: "problems.csv",
            body: render(PROBLEMS_HEADER, rows)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_header_only() {
        let body = render(CHATS_HEADER, Vec::<Vec<String>>::new()).unwrap();
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "E-mail 1,First Name 1,Last Name 1,E-mail 2,First Name 2,Last Name 2\n"
        );
    }

    #[test]
    fn test_render_quotes_fields() {
        let rows = vec![vec![
            "false".to_string(),
            "a@b.pl".to_string(),
            "Anna".to_string(),
            "Nowak".to_string(),
            "Login, again".to_string(),
            "She said \"hi\"".to_string(),
            "2025-03-01".to_string(),
        ]];
        let body = String::from_utf8(render(PROBLEMS_HEADER, rows).unwrap()).unwrap();
        let second = body.lines().nth(1).unwrap();
        assert_eq!(
            second,
            "false,a@b.pl,Anna,Nowak,\"Login, again\",\"She said \"\"hi\"\"\",2025-03-01"
        );
    }

    #[test]
    fn test_headers_match_column_counts() {
        assert_eq!(USERS_HEADER.len(), 7);
        assert_eq!(PLAYER_ADVERTISEMENTS_HEADER.len(), 13);
        assert_eq!(CLUB_ADVERTISEMENTS_HEADER.len(), 11);
        assert_eq!(CLUB_OFFERS_HEADER.len(), 11);
        assert_eq!(PLAYER_OFFERS_HEADER.len(), 11);
        assert_eq!(CLUB_HISTORY_HEADER.len(), 13);
        assert_eq!(MESSAGES_HEADER.len(), 8);
    }

    #[test]
    fn test_date_formats() {
        let at = Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(day(at), "2025-02-03");
        assert_eq!(timestamp(at), "2025-02-03 04:05:06");
    }
}
