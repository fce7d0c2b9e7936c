use rsconsts::*;

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    str::FromStr,
};

#[derive(Debug)]
pub enum ControlError {
    Io(String, std::io::Error),
    UnknownKey(String),
    BadValue { key: String, value: String },
    MissingParameter(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::Io(file, e) => write!(f, "cannot read {}: {}", file, e),
            ControlError::UnknownKey(line) => write!(f, "unknown parameter : {}", line),
            ControlError::BadValue { key, value } => {
                write!(f, "invalid value for {} : {}", key, value)
            }
            ControlError::MissingParameter(msg) => write!(f, "missing parameter : {}", msg),
        }
    }
}

impl std::error::Error for ControlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControlError::Io(_, e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Control {
    verbosity: String, // low, high
    task: String,      // energy, force, stress, all

    rc: f64,
    rd: f64,

    // rc = 3 rd_hat^2 h_max, rd = rd_hat h_max when rc/rd are not given
    rd_hat: f64,
    h_max: f64,

    parallel: bool,
    charge_neutral: bool,
}

impl Control {
    pub fn new() -> Control {
        Control::default()
    }

    pub fn get_verbosity(&self) -> &str {
        &self.verbosity
    }

    pub fn is_verbose(&self) -> bool {
        "high" == self.get_verbosity()
    }

    pub fn get_task(&self) -> &str {
        &self.task
    }

    pub fn needs_energy(&self) -> bool {
        matches!(self.get_task(), "energy" | "all")
    }

    pub fn needs_force(&self) -> bool {
        matches!(self.get_task(), "force" | "all")
    }

    pub fn needs_stress(&self) -> bool {
        matches!(self.get_task(), "stress" | "all")
    }

    pub fn get_rc(&self) -> f64 {
        self.rc
    }

    pub fn get_rd(&self) -> f64 {
        self.rd
    }

    pub fn get_rd_hat(&self) -> f64 {
        self.rd_hat
    }

    pub fn get_h_max(&self) -> f64 {
        self.h_max
    }

    pub fn get_parallel(&self) -> bool {
        self.parallel
    }

    pub fn get_charge_neutral(&self) -> bool {
        self.charge_neutral
    }

    pub fn read_file(&mut self, inpfile: &str) -> Result<(), ControlError> {
        let lines = self.read_file_data_to_vec(inpfile)?;

        self.parse_lines(&lines)
    }

    pub fn parse_lines(&mut self, lines: &[String]) -> Result<(), ControlError> {
        self.task = "all".to_string();
        self.verbosity = "high".to_string();

        self.rc = 0.0;
        self.rd = 0.0;
        self.rd_hat = 0.0;
        self.h_max = 0.0;

        self.parallel = true;
        self.charge_neutral = false;

        let mut b_rc_set = false;
        let mut b_rd_set = false;
        let mut b_rd_hat_set = false;
        let mut b_h_max_set = false;

        for line in lines.iter() {
            // everything after '#' is a comment
            let line = line.split('#').next().unwrap_or("").trim();

            if line.is_empty() {
                continue;
            }

            let s: Vec<&str> = line.split('=').map(|x| x.trim()).collect();

            if s.len() != 2 {
                return Err(ControlError::UnknownKey(line.to_string()));
            }

            match s[0] {
                "task" => {
                    let task = s[1].to_lowercase();

                    if !matches!(task.as_str(), "energy" | "force" | "stress" | "all") {
                        return Err(bad_value(s[0], s[1]));
                    }

                    self.task = task;
                }

                "verbosity" => {
                    let verbosity = s[1].to_lowercase();

                    if !matches!(verbosity.as_str(), "low" | "high") {
                        return Err(bad_value(s[0], s[1]));
                    }

                    self.verbosity = verbosity;
                }

                "rc" => {
                    self.rc = parse_value(s[0], s[1])?;
                    b_rc_set = true;
                }

                "rd" => {
                    self.rd = parse_value(s[0], s[1])?;
                    b_rd_set = true;
                }

                "rd_hat" => {
                    self.rd_hat = parse_value(s[0], s[1])?;
                    b_rd_hat_set = true;
                }

                "h_max" => {
                    self.h_max = parse_value(s[0], s[1])?;
                    b_h_max_set = true;
                }

                "parallel" => {
                    self.parallel = parse_value(s[0], s[1])?;
                }

                "charge_neutral" => {
                    self.charge_neutral = parse_value(s[0], s[1])?;
                }

                _ => {
                    return Err(ControlError::UnknownKey(line.to_string()));
                }
            }
        }

        // explicit rc/rd take precedence over the scaled form

        if b_rc_set && b_rd_set {
            return Ok(());
        }

        if b_rc_set || b_rd_set {
            return Err(ControlError::MissingParameter(
                "rc and rd must be given together".to_string(),
            ));
        }

        if b_rd_hat_set && b_h_max_set {
            self.rc = 3.0 * self.rd_hat * self.rd_hat * self.h_max;
            self.rd = self.rd_hat * self.h_max;

            return Ok(());
        }

        Err(ControlError::MissingParameter(
            "either rc and rd, or rd_hat and h_max".to_string(),
        ))
    }

    pub fn read_file_data_to_vec(&self, inpfile: &str) -> Result<Vec<String>, ControlError> {
        let file = File::open(inpfile).map_err(|e| ControlError::Io(inpfile.to_string(), e))?;

        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()
            .map_err(|e| ControlError::Io(inpfile.to_string(), e))?;

        Ok(lines)
    }

    pub fn display(&self) {
        println!("   {:-^80}", " control parameters ");
        println!();

        println!(
            "   {:<width1$} = {:>width2$}",
            "task",
            self.get_task(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$.6}",
            "rc",
            self.get_rc(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$.6}",
            "rd",
            self.get_rd(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        if self.rd_hat > 0.0 {
            println!(
                "   {:<width1$} = {:>width2$.6}",
                "rd_hat",
                self.get_rd_hat(),
                width1 = OUT_WIDTH1,
                width2 = OUT_WIDTH2
            );

            println!(
                "   {:<width1$} = {:>width2$.6}",
                "h_max",
                self.get_h_max(),
                width1 = OUT_WIDTH1,
                width2 = OUT_WIDTH2
            );
        }

        println!(
            "   {:<width1$} = {:>width2$}",
            "parallel",
            self.get_parallel(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$}",
            "charge_neutral",
            self.get_charge_neutral(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!(
            "   {:<width1$} = {:>width2$}",
            "verbosity",
            self.get_verbosity(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        println!();
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ControlError> {
    value.parse::<T>().map_err(|_| bad_value(key, value))
}

fn bad_value(key: &str, value: &str) -> ControlError {
    ControlError::BadValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
