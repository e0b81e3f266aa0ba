use catalog::{collections, Catalog, Locale, QueryState, SortKey, Translations};
use serde_json::Value;
use tracing::debug;

use crate::domains::catalog::data::{
    uncategorized_label, CategoryData, CategoryListData, CategoryPageData, CategoryRefData,
    CollectionData, CollectionsData, FeaturedData, LocaleData, ToolData, ToolDetailData,
    ToolListData, ToolListParams,
};
use crate::kernel::ServerDeps;

/// Tools per curated collection
pub const COLLECTION_LIMIT: usize = 8;

/// Same-category tools shown on a detail page
pub const RELATED_LIMIT: usize = 4;

/// Unknown or missing sort keys fall back to trending.
pub fn parse_sort(raw: Option<&str>) -> SortKey {
    raw.and_then(|s| s.parse().ok()).unwrap_or_default()
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Build the query state for `GET /api/tools`. `category` may be an id or
/// a slug; anything that matches neither filters to nothing.
pub fn tool_list_state(catalog: &Catalog, params: &ToolListParams) -> QueryState {
    let mut state = QueryState::new().with_sort(parse_sort(params.sort.as_deref()));

    if let Some(q) = &params.q {
        state = state.with_query(q.as_str());
    }

    if let Some(category) = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        let category_id = catalog
            .category_by_slug(category)
            .map(|c| c.id.as_str())
            .unwrap_or(category);
        state = state.with_category(category_id);
    }

    if let Some(tags) = &params.tags {
        state = state.with_tags(split_tags(tags));
    }

    state
}

/// Search, filter and sort tools
pub fn query_tools(deps: &ServerDeps, locale: Locale, params: &ToolListParams) -> ToolListData {
    let catalog = deps.catalogs.get(locale);
    let state = tool_list_state(&catalog, params);
    let tools = catalog.query(&state);

    debug!(
        query = %state.query,
        category = ?state.category_id,
        tags = state.tags.len(),
        sort = %state.sort,
        results = tools.len(),
        "Tool query"
    );

    ToolData::list(&tools, &catalog, &deps.translations, locale).into()
}

/// Get a single tool with its category and related tools
pub fn query_tool(deps: &ServerDeps, locale: Locale, id: &str) -> Option<ToolDetailData> {
    let catalog = deps.catalogs.get(locale);
    let translations = &deps.translations;
    let tool = catalog.tool(id)?;

    let category = match catalog.category_of(tool) {
        Some(category) => CategoryRefData::from(category),
        None => CategoryRefData::uncategorized(uncategorized_label(translations, locale)),
    };

    Some(ToolDetailData {
        tool: ToolData::new(tool, &catalog, translations, locale),
        category,
        related: ToolData::list(
            &catalog.related_tools(tool, RELATED_LIMIT),
            &catalog,
            translations,
            locale,
        ),
    })
}

/// All categories in source order with their tool counts
pub fn query_categories(deps: &ServerDeps, locale: Locale) -> CategoryListData {
    let catalog = deps.catalogs.get(locale);
    let counts = catalog.category_counts();

    let categories = catalog
        .categories()
        .iter()
        .map(|category| CategoryData {
            category: category.clone(),
            tool_count: counts.get(category.id.as_str()).copied().unwrap_or(0),
        })
        .collect();

    CategoryListData { categories }
}

/// A category page: the category and its tools. Without a recognised
/// `sort` the tools keep their source order.
pub fn query_category_page(
    deps: &ServerDeps,
    locale: Locale,
    slug: &str,
    sort: Option<&str>,
) -> Option<CategoryPageData> {
    let catalog = deps.catalogs.get(locale);
    let category = catalog.category_by_slug(slug)?;

    let records = match sort.and_then(|s| s.parse::<SortKey>().ok()) {
        Some(sort) => catalog.query(
            &QueryState::new()
                .with_category(category.id.as_str())
                .with_sort(sort),
        ),
        None => catalog.tools_in_category(&category.id),
    };
    let tools = ToolData::list(&records, &catalog, &deps.translations, locale);

    Some(CategoryPageData {
        category: CategoryData {
            category: category.clone(),
            tool_count: tools.len(),
        },
        count: tools.len(),
        tools,
    })
}

/// The four curated collections with localized titles
pub fn query_collections(deps: &ServerDeps, locale: Locale) -> CollectionsData {
    let catalog = deps.catalogs.get(locale);
    let translations = &deps.translations;

    let collections = collections(&catalog, COLLECTION_LIMIT)
        .into_iter()
        .map(|collection| {
            let key = collection.kind.translation_key();
            CollectionData {
                id: collection.kind.id(),
                title: translations.translate(
                    "collections",
                    &format!("collections.{}.title", key),
                    locale,
                ),
                description: translations.translate(
                    "collections",
                    &format!("collections.{}.description", key),
                    locale,
                ),
                tools: ToolData::list(&collection.tools, &catalog, translations, locale),
            }
        })
        .collect();

    CollectionsData { collections }
}

/// Every featured tool in source order
pub fn query_featured(deps: &ServerDeps, locale: Locale) -> FeaturedData {
    let catalog = deps.catalogs.get(locale);
    let tools = catalog.featured(usize::MAX);

    FeaturedData {
        tools: ToolData::list(&tools, &catalog, &deps.translations, locale),
    }
}

pub fn query_locales() -> Vec<LocaleData> {
    Locale::ALL.iter().copied().map(LocaleData::from).collect()
}

/// A translation namespace with missing keys filled from English
pub fn query_translations(
    translations: &Translations,
    locale: Locale,
    namespace: &str,
) -> Option<Value> {
    translations.namespace(namespace, locale)
}
