use std::process::ExitCode;

use clap::Parser;
use gitwok::{
   config::CommitConfig,
   error::Result,
   footer::parse_footer_block,
   style::{self, Reporter, TerminalReporter, icons},
   templates::render_template_file,
   types::{Args, Command, CommitArgs, CommitMessage},
   validation::check_allowed,
};

/// Build footers from CLI args: single footers first, then the parsed block
fn build_footers(args: &CommitArgs, reporter: &dyn Reporter) -> Vec<String> {
   let mut footers = args.footers.clone();
   if let Some(text) = &args.footer_text {
      footers.extend(parse_footer_block(text, reporter));
   }
   footers
}

fn build_message(args: &CommitArgs, reporter: &dyn Reporter) -> CommitMessage {
   CommitMessage::new(
      &args.commit_type,
      &args.scope,
      args.breaking,
      &args.description,
      &args.body,
      build_footers(args, reporter),
   )
}

/// Render with the template from the CLI or config, else the built-in format
fn render_message(msg: &CommitMessage, args: &CommitArgs, config: &CommitConfig) -> Result<String> {
   match args.template.as_deref().or(config.template.as_deref()) {
      Some(path) => render_template_file(msg, path),
      None => Ok(msg.render()),
   }
}

/// One line per footer naming its token and separator
fn describe_footers(msg: &CommitMessage) -> Vec<String> {
   msg.parsed_footers()
      .flatten()
      .map(|footer| {
         let kind = if footer.is_breaking_change() { "Breaking change" } else { "Footer" };
         format!("{kind} {:?} separated by \"{}\"", footer.token, footer.separator)
      })
      .collect()
}

fn run_commit(args: &CommitArgs, config: &CommitConfig, reporter: &dyn Reporter) -> Result<()> {
   let msg = build_message(args, reporter);

   // Malformed messages are reported before allow-list rejections
   if let Err(reason) = msg.validate() {
      for other in msg.violations().iter().skip(1) {
         reporter.verbose(&format!("Also invalid: {other}"));
      }
      return Err(reason.into());
   }
   check_allowed(&msg, config)?;

   for line in describe_footers(&msg) {
      reporter.verbose(&line);
   }

   if args.json {
      println!("{}", serde_json::to_string_pretty(&msg)?);
      return Ok(());
   }

   let rendered = render_message(&msg, args, config)?;
   reporter.verbose(&format!("Rendered commit message:\n{rendered}"));

   if let Some(path) = &args.output {
      std::fs::write(path, &rendered)?;
      eprintln!(
         "{} Wrote commit message to {} (use `git commit -F {}`)",
         style::success(icons::SUCCESS),
         path.display(),
         path.display()
      );
   } else {
      print!("{rendered}");
   }

   Ok(())
}

fn print_types(config: &CommitConfig) {
   let width = config.types.keys().map(String::len).max().unwrap_or(0);
   for (name, description) in &config.types {
      let padded = format!("{name:<width$}");
      println!("{}  {}", style::commit_type(&padded), style::dim(description));
   }
}

fn version_text(verbose: bool) -> String {
   let mut text = format!("gitwok v{}", env!("CARGO_PKG_VERSION"));
   if verbose {
      text.push('\n');
      text.push_str(env!("CARGO_PKG_DESCRIPTION"));
   }
   text
}

fn run(args: &Args, reporter: &TerminalReporter) -> Result<()> {
   let config = CommitConfig::load(args.config.as_deref())?;
   match &args.command {
      Command::Commit(commit_args) => run_commit(commit_args, &config, reporter),
      Command::Types => {
         print_types(&config);
         Ok(())
      },
      Command::Version => {
         println!("{}", version_text(args.verbose));
         Ok(())
      },
   }
}

fn main() -> ExitCode {
   let args = Args::parse();
   let reporter = TerminalReporter::new(args.verbose);

   match run(&args, &reporter) {
      Ok(()) => ExitCode::SUCCESS,
      Err(e) => {
         style::fail(&e.to_string());
         ExitCode::FAILURE
      },
   }
}
