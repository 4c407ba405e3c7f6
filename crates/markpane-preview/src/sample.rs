//! Default sample document shown before the author types anything.

/// Sample markdown exercising everything the previewer renders: headings,
/// inline formatting, code, a block quote, a table, nested lists, a link,
/// and an image.
pub const DEFAULT_DOCUMENT: &str = r#"# Markdown Live Preview

## Type on the left, see it here...
### And here's what it can do:

Inline code looks like `let x = 42;`, between two backticks.

```rust
// Multi-line code gets syntax highlighting:

fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
```

You can make text **bold**...
Or _italic_.
Or... wait for it... **_both!_**
And feel free to go crazy ~~crossing stuff out~~.

There are [links](https://example.com), and
> Block quotes!

And if you want to get fancy, even tables:

| Wild Header | Crazy Header | Another Header? |
|-------------|--------------|-----------------|
| Your content can be here, and it | can be here.... | okay. |
| And here. | Okay. | I think we get it. |

- And of course there are lists.
  - Some are bulleted.
     - With different indentation levels.
        - That look like this.

1. And there are numbered lists too.
1. Use just 1s if you want!
1. But the list goes on...

![Crab logo](https://example.com/images/crab.svg)
"#;
