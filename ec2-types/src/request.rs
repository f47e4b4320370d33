//! Traits shared by the request and response shapes.

/// A request for a single EC2 action.
pub trait Ec2Request {
    /// The EC2 action name, e.g. `DescribeInstances`.
    const ACTION: &'static str;
}

/// A request that accepts the `DryRun` flag.
///
/// With the flag set the service checks permissions and parameters without
/// performing the action, answering with the `DryRunOperation` error code when
/// the call would have succeeded.
pub trait DryRunSupported: Clone {
    fn dry_run(&self) -> Option<bool>;

    fn set_dry_run(&mut self, dry_run: Option<bool>);

    /// Returns a copy of this request with the dry-run flag set.
    fn dry_run_request(&self) -> Self {
        let mut request = self.clone();
        request.set_dry_run(Some(true));
        request
    }
}

/// A describe request that is answered page by page.
pub trait Paginated {
    fn next_token(&self) -> Option<&str>;

    fn set_next_token(&mut self, token: Option<String>);

    fn max_results(&self) -> Option<i32>;
}

/// One page of a paginated describe response.
pub trait PaginatedResponse {
    type Item;

    /// Token for the next page, absent on the last page.
    fn next_token(&self) -> Option<&str>;

    fn into_items(self) -> Vec<Self::Item>;
}
