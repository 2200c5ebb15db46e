use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mention_markup_config::Config;
use mention_markup_engine::{
    EventLog, RenderItem, RenderOptions, extract_hashtags,
    io::{self, Post},
    parse_segments,
    render::html::render_text_html,
    render_segments, to_plain_text,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

const PREVIEW_CHARS: usize = 28;

struct App {
    posts: Vec<Post>,
    post_list_state: ListState,
    options: RenderOptions,
    items: Vec<RenderItem>,
    hashtags: Vec<String>,
    focused: Option<usize>,
    navigator: EventLog,
}

impl App {
    fn new(posts: Vec<Post>, options: RenderOptions) -> Self {
        let mut app = Self {
            posts,
            post_list_state: ListState::default(),
            options,
            items: Vec::new(),
            hashtags: Vec::new(),
            focused: None,
            navigator: EventLog::new(),
        };

        // Select first post if available
        if !app.posts.is_empty() {
            app.post_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    fn next_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(i) => (i + 1) % self.posts.len(),
            None => 0,
        };
        self.post_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(0) | None => self.posts.len() - 1,
            Some(i) => i - 1,
        };
        self.post_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        self.focused = None;
        if let Some(post) = self
            .post_list_state
            .selected()
            .and_then(|index| self.posts.get(index))
        {
            self.items = render_segments(&parse_segments(&post.body), &self.options);
            self.hashtags = extract_hashtags(&post.body);
        } else {
            self.items.clear();
            self.hashtags.clear();
        }
    }

    /// Moves focus to the next clickable item, wrapping around.
    fn focus_next(&mut self) {
        let interactive: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_interactive())
            .map(|(i, _)| i)
            .collect();

        self.focused = match self.focused {
            Some(current) => interactive
                .iter()
                .copied()
                .find(|&i| i > current)
                .or_else(|| interactive.first().copied()),
            None => interactive.first().copied(),
        };
    }

    fn activate_focused(&mut self) -> bool {
        match self.focused.and_then(|i| self.items.get(i)) {
            Some(item) => item.activate(&mut self.navigator),
            None => false,
        }
    }

    fn status(&self) -> String {
        match self.navigator.last() {
            Some(event) => format!("Last: {event}"),
            None => "Tab to focus a mention or hashtag, Enter to open it".to_string(),
        }
    }
}

fn preview(post: &Post) -> String {
    let plain = to_plain_text(&post.body);
    let first_line = plain.lines().next().unwrap_or("");
    let mut preview: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if first_line.chars().count() > PREVIEW_CHARS {
        preview.push('…');
    }
    preview
}

fn item_style(item: &RenderItem) -> Style {
    match item {
        RenderItem::Plain(_) => Style::default(),
        RenderItem::EntityButton { .. } => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        RenderItem::StyledMention { .. } => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::ITALIC),
        RenderItem::HashtagLink { .. } => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::UNDERLINED),
    }
}

/// Lays render items out as terminal lines, breaking on embedded newlines.
fn render_lines(items: &[RenderItem], focused: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for (i, item) in items.iter().enumerate() {
        let mut style = item_style(item);
        if focused == Some(i) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        for (n, part) in item.label().split('\n').enumerate() {
            if n > 0 {
                lines.push(Line::default());
            }
            if part.is_empty() {
                continue;
            }
            if let Some(line) = lines.last_mut() {
                line.spans.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("mention-markup starting up");

    // Determine posts path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let html = args.iter().skip(1).any(|a| a == "--html");
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--html").collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if !positional.is_empty() => {
            log::warn!("Ignoring unreadable config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} [--html] <posts-file>", args[0]);
            process::exit(1);
        }
    };

    let (posts_path, from_config) = match (positional.as_slice(), &config) {
        ([path], _) => (PathBuf::from(path.as_str()), false),
        ([], Some(config)) => (config.posts_path.clone(), true),
        ([], None) => {
            eprintln!("Error: No posts file provided and no config file found");
            eprintln!("Usage: {} [--html] <posts-file>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [--html] [posts-file]", args[0]);
            process::exit(1);
        }
    };
    if from_config {
        log::info!("Using posts file from {}", config_path.display());
    }

    let options = config
        .as_ref()
        .map(|c| RenderOptions::with_hashtag_route(c.hashtag_route.clone()))
        .unwrap_or_default();

    // Validate posts file using engine
    if let Err(e) = io::validate_posts_file(&posts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Posts path '{}'{} is invalid: {e}",
            posts_path.display(),
            source
        );
        process::exit(1);
    }
    let posts = io::read_posts(&posts_path)?;

    if html {
        for post in &posts {
            println!("<p>{}</p>", render_text_html(&post.body, &options));
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(posts, options);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    for event in app.navigator.events() {
        log::info!("Dispatched: {event}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_post(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_post(),
                KeyCode::Tab => app.focus_next(),
                KeyCode::Enter => {
                    app.activate_focused();
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Post list panel
    let post_items: Vec<ListItem> = app
        .posts
        .iter()
        .map(|post| ListItem::new(Line::from(format!("{:>3} {}", post.number, preview(post)))))
        .collect();

    let posts_list = List::new(post_items)
        .block(Block::default().borders(Borders::ALL).title("Posts"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(posts_list, chunks[0], &mut app.post_list_state);

    // Content panel
    let mut content_text = if app.items.is_empty() {
        vec![Line::from("Select a post to view it")]
    } else {
        render_lines(&app.items, app.focused)
    };
    if !app.hashtags.is_empty() {
        content_text.push(Line::default());
        content_text.push(Line::from(Span::styled(
            format!("Hashtags: {}", app.hashtags.join(", ")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Post"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Status and instructions
    let footer = vec![
        Line::from(app.status()),
        Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k: Previous | "),
            Span::raw("↓/j: Next | "),
            Span::raw("Tab: Focus | Enter: Open"),
        ]),
    ];

    f.render_widget(Paragraph::new(footer).block(Block::default()), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mention_markup_engine::{MentionTarget, MentionType, NavigationEvent, io::split_posts};
    use pretty_assertions::assert_eq;

    fn app(content: &str) -> App {
        App::new(split_posts(content), RenderOptions::default())
    }

    #[test]
    fn selects_first_post_on_start() {
        let app = app("Hei @[Kari](user:9) #sami\n\nandre");
        assert_eq!(app.post_list_state.selected(), Some(0));
        assert_eq!(app.hashtags, vec!["sami"]);
        assert_eq!(app.items.len(), 4);
    }

    #[test]
    fn empty_posts_do_not_panic() {
        let mut app = app("");
        app.next_post();
        app.previous_post();
        app.focus_next();
        assert!(!app.activate_focused());
        assert!(app.items.is_empty());
    }

    #[test]
    fn post_navigation_wraps() {
        let mut app = app("en\n\nto\n\ntre");
        app.previous_post();
        assert_eq!(app.post_list_state.selected(), Some(2));
        app.next_post();
        assert_eq!(app.post_list_state.selected(), Some(0));
    }

    #[test]
    fn focus_cycles_through_interactive_items_only() {
        let mut app = app("@[Kari](user:9) og @Ola #joik");
        app.focus_next();
        assert_eq!(app.focused, Some(0));
        app.focus_next();
        assert_eq!(app.focused, Some(4));
        app.focus_next();
        assert_eq!(app.focused, Some(0));
    }

    #[test]
    fn enter_dispatches_focused_item() {
        let mut app = app("@[Kari](user:9) #Joik");
        assert!(!app.activate_focused());

        app.focus_next();
        assert!(app.activate_focused());
        app.focus_next();
        assert!(app.activate_focused());

        assert_eq!(
            app.navigator.events(),
            &[
                NavigationEvent::OpenEntity(MentionTarget::new(MentionType::User, "9")),
                NavigationEvent::OpenHashtag("joik".into()),
            ]
        );
        assert_eq!(app.status(), "Last: open hashtag #joik");
    }

    #[test]
    fn changing_post_resets_focus() {
        let mut app = app("#a\n\n#b");
        app.focus_next();
        assert_eq!(app.focused, Some(0));
        app.next_post();
        assert_eq!(app.focused, None);
        assert_eq!(app.hashtags, vec!["b"]);
    }

    #[test]
    fn preview_uses_plain_text_first_line() {
        let posts = split_posts("Takk @[Ola Nordmann](user:42)!\nmer tekst");
        assert_eq!(preview(&posts[0]), "Takk @Ola Nordmann!");

        let long = split_posts("Dette er et veldig langt innlegg om joik og duodji");
        assert_eq!(preview(&long[0]), "Dette er et veldig langt inn…");
    }

    #[test]
    fn render_lines_breaks_on_newlines() {
        let items = vec![
            RenderItem::Plain("først\nså ".into()),
            RenderItem::StyledMention {
                label: "@Ola".into(),
            },
        ];
        let lines = render_lines(&items, None);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[1].spans.len(), 2);
        assert_eq!(lines[1].spans[1].content, "@Ola");
    }
}
