//! Integration tests for rg-output.

use rg_agent::FinalState;

use crate::FinalStateRow;

fn ok_row(agent: u32, x: u32, y: u32, heading: &str) -> FinalStateRow {
    FinalStateRow { agent, result: Ok(FinalState { x, y, heading: heading.to_owned() }) }
}

fn err_row(agent: u32, reason: &str) -> FinalStateRow {
    FinalStateRow { agent, result: Err(reason.to_owned()) }
}

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::text::TextWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn writes_one_line_per_agent() {
        let mut w = TextWriter::new(Vec::new());
        w.write_row(&ok_row(0, 1, 3, "N")).unwrap();
        w.write_row(&ok_row(1, 5, 1, "E")).unwrap();
        w.finish().unwrap();
        assert_eq!(String::from_utf8(w.into_inner()).unwrap(), "1 3 N\n5 1 E\n");
    }

    #[test]
    fn failed_agent_keeps_its_line() {
        let mut w = TextWriter::new(Vec::new());
        w.write_row(&ok_row(0, 0, 0, "S")).unwrap();
        w.write_row(&err_row(1, "bad command")).unwrap();
        let out = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(out, "0 0 S\nERROR: bad command\n");
    }

    #[test]
    fn finish_idempotent() {
        let mut w = TextWriter::new(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
        assert!(w.into_inner().is_empty());
    }
}

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn read_back(bytes: Vec<u8>) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_reader(bytes.as_slice());
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn header_written_on_creation() {
        let w = CsvWriter::new(Vec::new()).unwrap();
        let (headers, rows) = read_back(w.into_inner().unwrap());
        assert_eq!(headers, ["agent", "x", "y", "heading", "error"]);
        assert!(rows.is_empty());
    }

    #[test]
    fn ok_and_error_rows() {
        let mut w = CsvWriter::new(Vec::new()).unwrap();
        w.write_row(&ok_row(0, 1, 3, "N")).unwrap();
        w.write_row(&err_row(1, "agent 1: malformed, command")).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_back(w.into_inner().unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "1");
        assert_eq!(&rows[0][2], "3");
        assert_eq!(&rows[0][3], "N");
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[1][1], "");
        // Embedded comma survives quoting.
        assert_eq!(&rows[1][4], "agent 1: malformed, command");
    }

    #[test]
    fn create_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final_states.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        w.write_row(&ok_row(0, 2, 2, "W")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "W");
    }
}

#[cfg(test)]
mod observer_tests {
    use rg_grid::GridBounds;
    use rg_input::AgentRecord;
    use rg_sim::{FailurePolicy, SimBuilder, SimConfig};

    use crate::observer::SimOutputObserver;
    use crate::text::TextWriter;

    fn record(x: u32, y: u32, heading: &str, commands: &str) -> AgentRecord {
        AgentRecord {
            start_x:  x,
            start_y:  y,
            heading:  heading.to_owned(),
            commands: commands.to_owned(),
        }
    }

    #[test]
    fn reference_mission_text() {
        let mut sim = SimBuilder::new(GridBounds::new(5, 5))
            .agents(vec![record(1, 2, "N", "LMLMLMLMM"), record(3, 3, "E", "MMRMMRMRRM")])
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(TextWriter::new(Vec::new()));
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 2);
        let out = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        assert_eq!(out, "1 3 N\n5 1 E\n");
    }

    #[test]
    fn isolated_failure_rendered_in_place() {
        let mut sim = SimBuilder::new(GridBounds::new(5, 5))
            .config(SimConfig::with_policy(FailurePolicy::Isolate))
            .agents(vec![
                record(0, 0, "N", "M"),
                record(9, 9, "N", "M"),
                record(1, 1, "E", "M"),
            ])
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(TextWriter::new(Vec::new()));
        sim.run(&mut obs).unwrap();
        let out = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "0 1 N");
        assert!(lines[1].starts_with("ERROR: "));
        assert_eq!(lines[2], "2 1 E");
    }

    #[test]
    fn csv_through_observer() {
        use crate::csv::CsvWriter;

        let mut sim = SimBuilder::new(GridBounds::new(3, 3))
            .agent(record(0, 0, "E", "MM"))
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(Vec::new()).unwrap());
        sim.run(&mut obs).unwrap();
        let bytes = obs.into_writer().into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "agent,x,y,heading,error\n0,2,0,E,\n");
    }
}
