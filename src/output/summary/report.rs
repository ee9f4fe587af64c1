// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::*;
use crate::statistics::Report;

impl SummaryFormatter for Report {
    fn output<W: Write>(&self, writer: &mut W, opts: &SummaryOptions) -> Result<()> {
        let (mean, min, max) = match (self.mean(), self.min(), self.max()) {
            (Some(mean), Some(min), Some(max)) => (mean, min, max),
            _ => {
                writeln!(writer, "No lookups were run, no data collected.")?;
                return Ok(());
            }
        };

        writeln!(
            writer,
            "Ran {} lookups in an average time of {}",
            self.total(),
            mean.render(opts)
        )?;
        writeln!(writer, "Min latency {}, max latency {}", min.render(opts), max.render(opts))?;
        writeln!(writer, "Found {} errors", self.errors())?;
        for (msg, count) in self.error_counts_by_frequency() {
            writeln!(writer, "\t{} returned {} times", msg, count)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use spectral::prelude::*;

    use super::*;
    use crate::probe::{Failure, Outcome};

    fn render(report: &Report, opts: &SummaryOptions) -> String {
        let mut buf = Vec::new();
        report.output(&mut buf, opts).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn single_lookup() {
        let report: Report = vec![Outcome::new(ms(10), None)].into_iter().collect();

        let out = render(&report, &SummaryOptions::default());

        assert_that(&out).is_equal_to(
            "Ran 1 lookups in an average time of 0.010000 seconds\n\
             Min latency 0.010000 seconds, max latency 0.010000 seconds\n\
             Found 0 errors\n"
                .to_string(),
        );
    }

    #[test]
    fn failed_lookups() {
        let report: Report = (0..10)
            .map(|_| Outcome::new(ms(1), Some(Failure::ResolutionError("no such host".to_string()))))
            .collect();

        let out = render(&report, &SummaryOptions::default());

        assert_that(&out).contains("Ran 10 lookups");
        assert_that(&out).contains("Found 10 errors\n\tno such host returned 10 times\n");
    }

    #[test]
    fn slow_lookup() {
        let report: Report = vec![
            Outcome::new(ms(100), None),
            Outcome::new(ms(700), Some(Failure::threshold_exceeded(ms(500)))),
            Outcome::new(ms(200), None),
        ]
        .into_iter()
        .collect();

        let out = render(&report, &SummaryOptions::default());

        assert_that(&out).is_equal_to(
            "Ran 3 lookups in an average time of 0.333333 seconds\n\
             Min latency 0.100000 seconds, max latency 0.700000 seconds\n\
             Found 1 errors\n\
             \tlookup exceeded threshold of 500ms returned 1 times\n"
                .to_string(),
        );
    }

    #[test]
    fn human_latencies() {
        let report: Report = vec![Outcome::new(ms(10), None)].into_iter().collect();

        let out = render(&report, &SummaryOptions::new(true));

        assert_that(&out).contains("average time of 10ms\n");
    }

    #[test]
    fn no_data() {
        let out = render(&Report::new(), &SummaryOptions::default());

        assert_that(&out).is_equal_to("No lookups were run, no data collected.\n".to_string());
    }
}
