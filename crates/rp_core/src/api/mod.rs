pub mod schedule_json;

pub use schedule_json::{
    generate_schedule_json, play_time_report_json, PlayerData, ReportResponse, ScheduleRequest,
    ScheduleResponse,
};
